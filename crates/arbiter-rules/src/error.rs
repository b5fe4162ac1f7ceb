//! Rules engine errors.
//!
//! Illegal moves are not errors; they come back as
//! [`Verdict::Illegal`](crate::validator::Verdict). These variants cover
//! misuse of the facade and states the engine refuses to reason about.

use arbiter_core::{Color, PieceKind, RecordError, Square, StateError};

/// Errors raised by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The game state breaks a structural invariant.
    #[error(transparent)]
    State(#[from] StateError),

    /// A persisted record could not be restored.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The side that just moved is still in check, which validated play cannot produce.
    #[error("{} is in check but it is {}'s turn", .color.name(), .color.flip().name())]
    WaitingSideInCheck {
        /// The color not on move.
        color: Color,
    },

    /// A move was applied from an empty square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty source square.
        square: Square,
    },

    /// A move was applied with a piece that does not belong to the side to move.
    #[error("the piece on {square} does not belong to {}", .color.name())]
    NotSideToMove {
        /// Source square.
        square: Square,
        /// The side to move.
        color: Color,
    },

    /// A move was applied that the piece on its source square cannot make.
    #[error("the piece on {from} cannot move to {to}")]
    Unreachable {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },

    /// A move was applied that would capture a king.
    #[error("refusing to capture the king on {square}")]
    KingCapture {
        /// Square of the king.
        square: Square,
    },

    /// A move was attempted while a promotion awaits its piece.
    #[error("promotion on {square} must be finalized first")]
    PromotionPending {
        /// Square of the pawn awaiting promotion.
        square: Square,
    },

    /// A promotion was finalized when none was pending.
    #[error("no promotion is pending")]
    NoPendingPromotion,

    /// A pawn may not promote to this kind.
    #[error("cannot promote to a {kind}")]
    InvalidPromotion {
        /// The rejected kind.
        kind: PieceKind,
    },
}
