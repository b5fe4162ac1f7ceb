//! Error types for FEN parsing, persisted records, and state validation.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The FEN string has neither 4 nor 6 space-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized or repeated character appeared in the castling field.
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    InvalidMoveCounter {
        /// The invalid string.
        found: String,
    },
    /// The parsed position breaks a game-state invariant.
    InvalidState {
        /// The underlying validation error.
        source: StateError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 4 or 6 FEN fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} squares, expected 8")
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidCastlingChar { character } => {
                write!(f, "invalid castling character: '{character}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square: \"{found}\"")
            }
            FenError::InvalidMoveCounter { found } => {
                write!(f, "invalid move counter: \"{found}\"")
            }
            FenError::InvalidState { source } => {
                write!(f, "invalid position: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidState { source } => Some(source),
            _ => None,
        }
    }
}

impl From<StateError> for FenError {
    fn from(source: StateError) -> Self {
        FenError::InvalidState { source }
    }
}

/// A game state that breaks an invariant the rules depend on.
///
/// These are never produced by validated play; they signal a corrupted or
/// hand-crafted input, and the engine refuses to reason about such a state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {}, found {count}", .color.name())]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on the first or eighth rank outside a pending promotion.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// The offending square.
        square: Square,
    },
    /// The history says the king never moved, but it is not on its home square.
    #[error("{} king marked unmoved but not on its home square", .color.name())]
    KingNotHome {
        /// Whose king.
        color: Color,
    },
    /// The history says a rook never moved, but its corner holds no such rook.
    #[error("{} {side:?} rook marked unmoved but missing from its corner", .color.name())]
    RookNotHome {
        /// Whose rook.
        color: Color,
        /// Which corner.
        side: CastleSide,
    },
    /// The en passant target does not follow a double pawn step.
    #[error("en passant target {square} is inconsistent with the position")]
    EnPassantInconsistent {
        /// The recorded target.
        square: Square,
    },
    /// The pending promotion marker does not point at a pawn on its last rank.
    #[error("pending promotion at {square} does not hold a promotable pawn")]
    PromotionInconsistent {
        /// The marked square.
        square: Square,
    },
    /// The state is mid-promotion and cannot be captured as a turn boundary.
    #[error("promotion at {square} has not been finalized")]
    PromotionPending {
        /// Square of the pawn awaiting promotion.
        square: Square,
    },
}

/// Errors from converting a persisted [`PositionRecord`](crate::record::PositionRecord).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The record does not describe exactly 64 squares.
    #[error("expected 64 squares in record, found {found}")]
    WrongSquareCount {
        /// Number of squares present.
        found: usize,
    },
    /// The record decodes to a state that breaks an invariant.
    #[error("invalid record: {0}")]
    Invalid(#[from] StateError),
}
