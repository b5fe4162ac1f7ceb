//! King location and check detection.

use arbiter_core::{Color, GameState, Piece, PieceKind, Position, Square, StateError};

use crate::attack;

/// Return the square of `color`'s king.
///
/// Exactly one king per color must be on the board; anything else is a
/// corrupted state and is reported rather than guessed around.
pub fn king_square(position: &Position, color: Color) -> Result<Square, StateError> {
    let mut kings = position.find(Piece::new(PieceKind::King, color));
    match (kings.next(), kings.next()) {
        (Some(sq), None) => Ok(sq),
        (None, _) => Err(StateError::InvalidKingCount { color, count: 0 }),
        (Some(_), Some(_)) => Err(StateError::InvalidKingCount {
            color,
            count: 2 + kings.count(),
        }),
    }
}

/// Return `true` if `color`'s king is attacked.
pub fn in_check(state: &GameState, color: Color) -> Result<bool, StateError> {
    let king = king_square(state.position(), color)?;
    Ok(attack::is_attacked(state.position(), king, color.flip()))
}

/// Squares of the pieces currently giving check to `color`.
pub fn checkers(state: &GameState, color: Color) -> Result<Vec<Square>, StateError> {
    let king = king_square(state.position(), color)?;
    Ok(attack::attackers(state.position(), king, color.flip()).collect())
}
