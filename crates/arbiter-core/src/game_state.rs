//! The authoritative game state: placement, side to move, castling history,
//! en passant target, and the pending-promotion marker.

use std::fmt;

use tracing::warn;

use crate::castle_rights::{CastleSide, CastlingRights, king_home};
use crate::color::Color;
use crate::error::StateError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Complete game state between (or, for promotions, within) turns.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Piece placement.
    position: Position,
    /// Which side moves next.
    side_to_move: Color,
    /// Castling history, indexed by [`Color::index()`].
    castling: [CastlingRights; Color::COUNT],
    /// Square a pawn skipped over on the previous move, if that move was a double step.
    en_passant: Option<Square>,
    /// Square of a pawn that reached its last rank and awaits its new kind.
    pending_promotion: Option<Square>,
}

impl GameState {
    /// Return the standard starting state.
    pub fn starting_position() -> GameState {
        GameState {
            position: Position::starting(),
            side_to_move: Color::White,
            castling: [CastlingRights::UNMOVED; Color::COUNT],
            en_passant: None,
            pending_promotion: None,
        }
    }

    /// Assemble a state from parts, validating every invariant.
    pub fn from_parts(
        position: Position,
        side_to_move: Color,
        castling: [CastlingRights; Color::COUNT],
        en_passant: Option<Square>,
    ) -> Result<GameState, StateError> {
        let state = GameState {
            position,
            side_to_move,
            castling,
            en_passant,
            pending_promotion: None,
        };
        state.validate()?;
        Ok(state)
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Shorthand for `self.position().piece_on(sq)`.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.position.piece_on(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the castling history for `color`.
    #[inline]
    pub fn castling(&self, color: Color) -> CastlingRights {
        self.castling[color.index()]
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    #[inline]
    pub(crate) fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, color: Color, rights: CastlingRights) {
        self.castling[color.index()] = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_pending_promotion(&mut self, sq: Option<Square>) {
        self.pending_promotion = sq;
    }

    /// Check every structural invariant the rules rely on.
    pub fn validate(&self) -> Result<(), StateError> {
        let result = self.check_invariants();
        if let Err(err) = &result {
            warn!(%err, "game state failed validation");
        }
        result
    }

    fn check_invariants(&self) -> Result<(), StateError> {
        for color in Color::ALL {
            let count = self.position.find(Piece::new(PieceKind::King, color)).count();
            if count != 1 {
                return Err(StateError::InvalidKingCount { color, count });
            }
        }

        if let Some(square) = self.pending_promotion {
            let color = self.side_to_move;
            let promotable = self.position.piece_on(square) == Some(Piece::new(PieceKind::Pawn, color))
                && square.rank() == color.promotion_rank();
            if !promotable {
                return Err(StateError::PromotionInconsistent { square });
            }
        }

        for (square, piece) in self.position.pieces() {
            let back_rank = square.rank() == 0 || square.rank() == 7;
            if piece.kind() == PieceKind::Pawn && back_rank && self.pending_promotion != Some(square) {
                return Err(StateError::PawnOnBackRank { square });
            }
        }

        for color in Color::ALL {
            let rights = self.castling(color);
            if !rights.king_moved()
                && self.position.piece_on(king_home(color)) != Some(Piece::new(PieceKind::King, color))
            {
                return Err(StateError::KingNotHome { color });
            }
            for side in CastleSide::ALL {
                if !rights.rook_moved(side)
                    && self.position.piece_on(side.rook_home(color))
                        != Some(Piece::new(PieceKind::Rook, color))
                {
                    return Err(StateError::RookNotHome { color, side });
                }
            }
        }

        if let Some(square) = self.en_passant
            && !self.en_passant_consistent(square)
        {
            return Err(StateError::EnPassantInconsistent { square });
        }

        Ok(())
    }

    /// The target must sit behind a pawn of the side that just moved, which
    /// can only have come from its starting rank across two empty squares.
    fn en_passant_consistent(&self, target: Square) -> bool {
        let mover = self.side_to_move.flip();
        if target.rank() as i8 != mover.pawn_rank() as i8 + mover.forward() {
            return false;
        }
        let landing = target.offset(0, mover.forward());
        let origin = target.offset(0, -mover.forward());
        match (landing, origin) {
            (Some(landing), Some(origin)) => {
                self.position.piece_on(landing) == Some(Piece::new(PieceKind::Pawn, mover))
                    && !self.position.is_occupied(target)
                    && !self.position.is_occupied(origin)
            }
            _ => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::starting_position()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameState(\"{}\"", self)?;
        if let Some(sq) = self.pending_promotion {
            write!(f, ", promoting {sq}")?;
        }
        write!(f, ")")
    }
}
