//! Flat snapshot of a game state for the persistence layer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::castle_rights::{CastleSide, CastlingRights};
use crate::color::Color;
use crate::error::{RecordError, StateError};
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// Everything needed to resume a game at a turn boundary.
///
/// `squares` is indexed like [`Square::index`] (a1 = 0, h8 = 63). How the
/// record is encoded and stored is up to the caller; the serde derives map
/// pieces to FEN letters and squares to algebraic names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub squares: Vec<Option<Piece>>,
    pub side_to_move: Color,
    pub white_king_moved: bool,
    pub white_kingside_rook_moved: bool,
    pub white_queenside_rook_moved: bool,
    pub black_king_moved: bool,
    pub black_kingside_rook_moved: bool,
    pub black_queenside_rook_moved: bool,
    pub en_passant: Option<Square>,
}

impl GameState {
    /// Capture this state as a record.
    ///
    /// Fails while a promotion is pending, since that is not a turn boundary.
    pub fn to_record(&self) -> Result<PositionRecord, StateError> {
        if let Some(square) = self.pending_promotion() {
            return Err(StateError::PromotionPending { square });
        }

        let white = self.castling(Color::White);
        let black = self.castling(Color::Black);
        Ok(PositionRecord {
            squares: Square::all().map(|sq| self.piece_on(sq)).collect(),
            side_to_move: self.side_to_move(),
            white_king_moved: white.king_moved(),
            white_kingside_rook_moved: white.rook_moved(CastleSide::KingSide),
            white_queenside_rook_moved: white.rook_moved(CastleSide::QueenSide),
            black_king_moved: black.king_moved(),
            black_kingside_rook_moved: black.rook_moved(CastleSide::KingSide),
            black_queenside_rook_moved: black.rook_moved(CastleSide::QueenSide),
            en_passant: self.en_passant(),
        })
    }

    /// Rebuild a state from a record, rejecting anything that breaks an invariant.
    pub fn from_record(record: &PositionRecord) -> Result<GameState, RecordError> {
        if record.squares.len() != Square::COUNT {
            return Err(RecordError::WrongSquareCount {
                found: record.squares.len(),
            });
        }

        let mut position = Position::EMPTY;
        for (sq, piece) in Square::all().zip(&record.squares) {
            if let Some(piece) = *piece {
                position.put(sq, piece);
            }
        }

        let castling = [
            CastlingRights::from_flags(
                record.white_king_moved,
                record.white_kingside_rook_moved,
                record.white_queenside_rook_moved,
            ),
            CastlingRights::from_flags(
                record.black_king_moved,
                record.black_kingside_rook_moved,
                record.black_queenside_rook_moved,
            ),
        ];

        let state = GameState::from_parts(position, record.side_to_move, castling, record.en_passant)?;
        debug!(fen = %state, "restored game state from record");
        Ok(state)
    }
}
