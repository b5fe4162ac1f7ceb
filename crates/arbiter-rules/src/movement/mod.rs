//! Per-piece geometric legality.
//!
//! Everything here answers "could this piece relocate there" against a fixed
//! snapshot, ignoring whose turn it is and whether the mover's king would be
//! left in check. Those concerns belong to [`crate::validator`].

mod king;
mod knights;
mod pawns;
mod sliders;

use arbiter_core::{Color, GameState, MoveKind, Piece, PieceKind, Position, Square};

pub use sliders::squares_between;

/// Classify a move of the piece on `from` to `to`, or `None` if its geometry forbids it.
///
/// Assumes `to` does not hold a piece of `color`; that is rejected upstream.
pub fn classify(state: &GameState, from: Square, to: Square, color: Color) -> Option<MoveKind> {
    if from == to {
        return None;
    }
    let piece = state.piece_on(from)?;
    let landing = || {
        if state.position().color_on(to) == Some(color.flip()) {
            MoveKind::Capture
        } else {
            MoveKind::Quiet
        }
    };

    match piece.kind() {
        PieceKind::Pawn => pawns::classify(state, from, to, color),
        PieceKind::Knight => knights::reachable(from, to).then(landing),
        kind @ (PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            sliders::reachable(kind, from, to, state.position()).then(landing)
        }
        PieceKind::King => {
            if king::single_step(from, to) {
                Some(landing())
            } else {
                king::castle(state, from, to, color)
            }
        }
    }
}

/// Return `true` if the piece on `from` could relocate to `to`.
#[inline]
pub fn reachable(state: &GameState, from: Square, to: Square, color: Color) -> bool {
    classify(state, from, to, color).is_some()
}

/// Return `true` if `piece` standing on `from` attacks `to`.
///
/// Attack geometry differs from movement in two places: pawns attack both
/// forward diagonals whether or not anything stands there, and kings attack
/// adjacent squares only, never through castling.
pub fn attacks(piece: Piece, from: Square, to: Square, position: &Position) -> bool {
    if from == to {
        return false;
    }
    match piece.kind() {
        PieceKind::Pawn => pawns::attacks(from, to, piece.color()),
        PieceKind::Knight => knights::reachable(from, to),
        kind @ (PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            sliders::reachable(kind, from, to, position)
        }
        PieceKind::King => king::single_step(from, to),
    }
}
