//! Rules engine configuration.

/// How the checkmate engine looks for a way out of check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EvasionSearch {
    /// Try only king moves, captures of a lone checker, interpositions
    /// between it and the king, and en passant captures of a checking pawn.
    #[default]
    Restricted,
    /// Validate every own-piece and destination pair.
    FullEnumeration,
}

/// Configuration knobs for an [`Arbiter`](crate::Arbiter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArbiterConfig {
    /// Search used by the checkmate engine while the side to move is in check.
    pub evasion_search: EvasionSearch,
}

impl ArbiterConfig {
    /// Configuration that always enumerates every candidate move.
    pub fn full_enumeration() -> Self {
        Self {
            evasion_search: EvasionSearch::FullEnumeration,
        }
    }
}
