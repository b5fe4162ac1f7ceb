//! King geometry: single steps, plus castling delegated to the special rules.

use arbiter_core::{Color, GameState, MoveKind, Square};

use crate::special;

/// Return `true` if `to` is adjacent to `from`, diagonals included.
#[inline]
pub(super) fn single_step(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    from != to && df.abs() <= 1 && dr.abs() <= 1
}

/// Classify a two-file king move as castling, if it is one and castling is available.
pub(super) fn castle(state: &GameState, from: Square, to: Square, color: Color) -> Option<MoveKind> {
    let side = special::castle_side_for(from, to, color)?;
    special::can_castle(state, color, side).then_some(MoveKind::Castle(side))
}
