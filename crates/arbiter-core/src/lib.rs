//! Core chess types: squares, pieces, the game state, and move application.

mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game_state;
mod make_move;
mod piece;
mod piece_kind;
mod position;
mod record;
mod square;

pub use castle_rights::{CastleSide, CastlingRights, KING_HOME_FILE, king_home};
pub use chess_move::{Move, MoveKind, PromotionPiece, parse_coordinate_move};
pub use color::Color;
pub use error::{FenError, RecordError, StateError};
pub use fen::STARTING_FEN;
pub use game_state::GameState;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use record::PositionRecord;
pub use square::Square;
