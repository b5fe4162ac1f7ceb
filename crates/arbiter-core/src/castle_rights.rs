//! Per-color castling history: whether the king and each rook have moved.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File the rook starts on.
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on, the square the king passes over.
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Starting square of this side's rook for `color`.
    pub fn rook_home(self, color: Color) -> Square {
        home_square(self.rook_file(), color)
    }

    /// Square the king ends on after castling.
    pub fn king_target(self, color: Color) -> Square {
        home_square(self.king_target_file(), color)
    }

    /// Square the rook ends on after castling.
    pub fn rook_target(self, color: Color) -> Square {
        home_square(self.rook_target_file(), color)
    }
}

/// File every king starts on.
pub const KING_HOME_FILE: u8 = 4;

/// Starting square of the king of `color`.
pub fn king_home(color: Color) -> Square {
    home_square(KING_HOME_FILE, color)
}

fn home_square(file: u8, color: Color) -> Square {
    match Square::from_coords(file, color.back_rank()) {
        Some(sq) => sq,
        None => unreachable!("back-rank files are always on the board"),
    }
}

/// Move history relevant to castling for one color.
///
/// The flags are monotonic: once set they are never cleared, so every update
/// returns a value that is at least as restrictive as the input.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    king_moved: bool,
    kingside_rook_moved: bool,
    queenside_rook_moved: bool,
}

impl CastlingRights {
    /// Nothing has moved yet.
    pub const UNMOVED: CastlingRights = CastlingRights {
        king_moved: false,
        kingside_rook_moved: false,
        queenside_rook_moved: false,
    };

    /// Everything has moved; castling is permanently unavailable.
    pub const SPENT: CastlingRights = CastlingRights {
        king_moved: true,
        kingside_rook_moved: true,
        queenside_rook_moved: true,
    };

    /// Build from raw flags, as stored in a persisted record.
    pub const fn from_flags(
        king_moved: bool,
        kingside_rook_moved: bool,
        queenside_rook_moved: bool,
    ) -> CastlingRights {
        CastlingRights {
            king_moved,
            kingside_rook_moved,
            queenside_rook_moved,
        }
    }

    #[inline]
    pub const fn king_moved(self) -> bool {
        self.king_moved
    }

    #[inline]
    pub const fn rook_moved(self, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.kingside_rook_moved,
            CastleSide::QueenSide => self.queenside_rook_moved,
        }
    }

    /// Return `true` if neither the king nor the rook of `side` has moved.
    #[inline]
    pub const fn allows(self, side: CastleSide) -> bool {
        !self.king_moved && !self.rook_moved(side)
    }

    /// Return rights with the king marked as moved.
    pub const fn with_king_moved(self) -> CastlingRights {
        CastlingRights {
            king_moved: true,
            ..self
        }
    }

    /// Return rights with the rook of `side` marked as moved.
    pub const fn with_rook_moved(self, side: CastleSide) -> CastlingRights {
        match side {
            CastleSide::KingSide => CastlingRights {
                kingside_rook_moved: true,
                ..self
            },
            CastleSide::QueenSide => CastlingRights {
                queenside_rook_moved: true,
                ..self
            },
        }
    }

    /// Return rights after a move touched `sq` as its source or destination.
    ///
    /// Touching the king's home square marks the king; touching a rook corner
    /// marks that rook, which also covers an unmoved rook being captured.
    pub fn touched(self, sq: Square, color: Color) -> CastlingRights {
        if sq == king_home(color) {
            return self.with_king_moved();
        }
        CastleSide::ALL
            .into_iter()
            .filter(|side| side.rook_home(color) == sq)
            .fold(self, |rights, side| rights.with_rook_moved(side))
    }

    /// FEN letters for this color, or an empty string.
    pub fn fen_letters(self, color: Color) -> String {
        let mut s = String::with_capacity(2);
        if self.allows(CastleSide::KingSide) {
            s.push('K');
        }
        if self.allows(CastleSide::QueenSide) {
            s.push('Q');
        }
        match color {
            Color::White => s,
            Color::Black => s.to_ascii_lowercase(),
        }
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CastlingRights(king_moved: {}, kingside_rook_moved: {}, queenside_rook_moved: {})",
            self.king_moved, self.kingside_rook_moved, self.queenside_rook_moved
        )
    }
}
