//! Chess rules engine for arbiter: move legality, check, checkmate and
//! stalemate detection, and the special moves.

pub mod attack;
pub mod check;
pub mod config;
pub mod error;
pub mod movement;
pub mod perft;
pub mod special;
pub mod status;
pub mod validator;

mod arbiter;

pub use arbiter::Arbiter;
pub use config::{ArbiterConfig, EvasionSearch};
pub use error::RulesError;
pub use perft::{divide, perft};
pub use status::GameStatus;
pub use validator::{Illegal, Verdict};
