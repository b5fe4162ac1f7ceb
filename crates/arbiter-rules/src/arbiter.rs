//! The turn-loop facing facade.
//!
//! [`Arbiter`] owns the authoritative [`GameState`]. Queries borrow it and
//! evaluate hypotheticals on copies; only [`Arbiter::apply_move`] and
//! [`Arbiter::finalize_promotion`] replace it.

use arbiter_core::{Color, GameState, Move, Piece, PieceKind, PositionRecord, Square};
use tracing::debug;

use crate::check;
use crate::config::ArbiterConfig;
use crate::error::RulesError;
use crate::movement;
use crate::special;
use crate::status::{self, GameStatus};
use crate::validator::{self, Verdict};

/// Rules arbiter for a single game.
#[derive(Debug, Clone)]
pub struct Arbiter {
    state: GameState,
    config: ArbiterConfig,
}

impl Arbiter {
    /// A game at the standard starting position.
    pub fn new() -> Self {
        Self::with_config(ArbiterConfig::default())
    }

    /// A game at the standard starting position with `config`.
    pub fn with_config(config: ArbiterConfig) -> Self {
        Self {
            state: GameState::starting_position(),
            config,
        }
    }

    /// Take over an existing state after checking its invariants.
    ///
    /// Besides the structural checks of [`GameState::validate`], the side
    /// that just moved must not be left in check.
    pub fn from_state(state: GameState, config: ArbiterConfig) -> Result<Self, RulesError> {
        state.validate()?;
        if state.pending_promotion().is_none() {
            let waiting = state.side_to_move().flip();
            if check::in_check(&state, waiting)? {
                return Err(RulesError::WaitingSideInCheck { color: waiting });
            }
        }
        Ok(Self { state, config })
    }

    /// Restore a game from a persisted record.
    pub fn from_record(record: &PositionRecord, config: ArbiterConfig) -> Result<Self, RulesError> {
        let state = GameState::from_record(record)?;
        Self::from_state(state, config)
    }

    /// Snapshot the game for persistence. Fails while a promotion is pending.
    pub fn to_record(&self) -> Result<PositionRecord, RulesError> {
        Ok(self.state.to_record()?)
    }

    /// The authoritative state.
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Full verdict for a move by `color`, including the rejection reason.
    pub fn verdict(&self, from: Square, to: Square, color: Color) -> Result<Verdict, RulesError> {
        Ok(validator::validate(&self.state, from, to, color)?)
    }

    /// Return `true` if `color` may move the piece on `from` to `to`.
    pub fn validate_move(&self, from: Square, to: Square, color: Color) -> Result<bool, RulesError> {
        Ok(self.verdict(from, to, color)?.is_legal())
    }

    /// Like [`validate_move`](Self::validate_move) for raw (file, rank) pairs.
    pub fn validate_coords(&self, from: (u8, u8), to: (u8, u8), color: Color) -> Result<bool, RulesError> {
        Ok(validator::validate_coords(&self.state, from, to, color)?.is_legal())
    }

    /// Apply a move by the side to move and return the captured piece, if any.
    ///
    /// The move should already have passed [`validate_move`](Self::validate_move).
    /// Moves that would corrupt the state are refused: an empty or foreign
    /// source square, a move the piece cannot make, the capture of a king, or
    /// any move while a promotion is pending.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, RulesError> {
        if let Some(square) = self.state.pending_promotion() {
            return Err(RulesError::PromotionPending { square });
        }
        let color = self.state.side_to_move();
        let piece = self
            .state
            .piece_on(from)
            .ok_or(RulesError::EmptySquare { square: from })?;
        if piece.color() != color {
            return Err(RulesError::NotSideToMove { square: from, color });
        }
        match self.state.piece_on(to) {
            Some(target) if target.kind() == PieceKind::King => {
                return Err(RulesError::KingCapture { square: to });
            }
            Some(target) if target.color() == color => {
                return Err(RulesError::Unreachable { from, to });
            }
            _ => {}
        }
        let kind = movement::classify(&self.state, from, to, color)
            .ok_or(RulesError::Unreachable { from, to })?;

        let mv = Move::new(from, to, kind);
        let (next, captured) = self.state.make_move(mv);
        self.state = next;
        debug!(%mv, ?kind, ?captured, fen = %self.state, "move applied");
        Ok(captured)
    }

    /// Return `true` if `color`'s king is attacked.
    pub fn in_check(&self, color: Color) -> Result<bool, RulesError> {
        Ok(check::in_check(&self.state, color)?)
    }

    /// Classify the game for the side to move. Fails while a promotion is pending.
    pub fn game_status(&self) -> Result<GameStatus, RulesError> {
        Ok(status::classify(&self.state, self.config.evasion_search)?)
    }

    /// Square of the pawn awaiting its promotion piece, if any.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.state.pending_promotion()
    }

    /// Turn the pending pawn into `kind` and pass the move to the opponent.
    pub fn finalize_promotion(&mut self, kind: PieceKind) -> Result<(), RulesError> {
        self.state = special::finalize_promotion(&self.state, kind)?;
        Ok(())
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> Result<Vec<Move>, RulesError> {
        Ok(status::legal_moves(&self.state)?)
    }
}

impl Default for Arbiter {
    fn default() -> Self {
        Self::new()
    }
}
