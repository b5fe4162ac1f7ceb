//! Full move legality: ownership, occupancy, geometry, and king safety.

use std::fmt;

use arbiter_core::{Color, GameState, Move, Square, StateError};
use tracing::trace;

use crate::check;
use crate::movement;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Illegal {
    /// Start and finish are the same square.
    SameSquare,
    /// A coordinate lies outside 0–7.
    OutOfBounds,
    /// The start square does not hold a piece of the moving color.
    NotOwnPiece,
    /// The finish square holds a piece of the moving color.
    OwnPieceOnTarget,
    /// The piece cannot travel that way.
    Unreachable,
    /// The move would leave the mover's king attacked.
    LeavesKingInCheck,
    /// A promotion must be finalized before anything else moves.
    PromotionPending,
}

impl fmt::Display for Illegal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Illegal::SameSquare => "start and finish are the same square",
            Illegal::OutOfBounds => "square is off the board",
            Illegal::NotOwnPiece => "no piece of yours on the start square",
            Illegal::OwnPieceOnTarget => "the finish square holds your own piece",
            Illegal::Unreachable => "that piece cannot move there",
            Illegal::LeavesKingInCheck => "your king would be in check",
            Illegal::PromotionPending => "a promotion is waiting for its piece",
        };
        f.write_str(reason)
    }
}

/// Outcome of validating a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The move is legal; carries its classification for application.
    Legal(Move),
    /// The move is rejected for the given reason.
    Illegal(Illegal),
}

impl Verdict {
    #[inline]
    pub fn is_legal(self) -> bool {
        matches!(self, Verdict::Legal(_))
    }

    /// The classified move, if legal.
    pub fn legal_move(self) -> Option<Move> {
        match self {
            Verdict::Legal(mv) => Some(mv),
            Verdict::Illegal(_) => None,
        }
    }
}

/// Validate a move by `color` from `from` to `to`.
///
/// Checks run in order and stop at the first failure. The last check plays
/// the move on a copy of `state` and asks whether `color`'s king is attacked
/// afterward; `state` itself is never modified. An `Err` means the state is
/// corrupt (for example, a king is missing), not that the move is illegal.
pub fn validate(state: &GameState, from: Square, to: Square, color: Color) -> Result<Verdict, StateError> {
    let verdict = judge(state, from, to, color)?;
    trace!(%from, %to, ?color, ?verdict, "validated move");
    Ok(verdict)
}

/// Validate a move given as raw (file, rank) pairs, rejecting coordinates off the board.
pub fn validate_coords(
    state: &GameState,
    from: (u8, u8),
    to: (u8, u8),
    color: Color,
) -> Result<Verdict, StateError> {
    if from == to {
        return Ok(Verdict::Illegal(Illegal::SameSquare));
    }
    match (Square::from_coords(from.0, from.1), Square::from_coords(to.0, to.1)) {
        (Some(from), Some(to)) => validate(state, from, to, color),
        _ => Ok(Verdict::Illegal(Illegal::OutOfBounds)),
    }
}

fn judge(state: &GameState, from: Square, to: Square, color: Color) -> Result<Verdict, StateError> {
    use Verdict::Illegal as Reject;

    if state.pending_promotion().is_some() {
        return Ok(Reject(Illegal::PromotionPending));
    }
    if from == to {
        return Ok(Reject(Illegal::SameSquare));
    }
    if state.position().color_on(from) != Some(color) {
        return Ok(Reject(Illegal::NotOwnPiece));
    }
    if state.position().color_on(to) == Some(color) {
        return Ok(Reject(Illegal::OwnPieceOnTarget));
    }
    let Some(kind) = movement::classify(state, from, to, color) else {
        return Ok(Reject(Illegal::Unreachable));
    };

    let mv = Move::new(from, to, kind);
    let (after, _) = state.make_move(mv);
    if check::in_check(&after, color)? {
        return Ok(Reject(Illegal::LeavesKingInCheck));
    }
    Ok(Verdict::Legal(mv))
}
