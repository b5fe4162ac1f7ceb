//! Move application via copy-make.

use tracing::trace;

use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::color::Color;
use crate::game_state::GameState;
use crate::piece::Piece;

impl GameState {
    /// Apply a classified move and return the resulting state together with
    /// the captured piece, if any. Copy-make: `self` is not modified.
    ///
    /// The move must already have been validated. If the source square is
    /// empty the state is returned unchanged.
    ///
    /// A promotion leaves the pawn on its last rank, records the square as
    /// pending, and keeps the side to move until
    /// [`complete_promotion`](GameState::complete_promotion) is called.
    pub fn make_move(&self, mv: Move) -> (GameState, Option<Piece>) {
        let mut s = *self;
        let (from, to) = (mv.from(), mv.to());

        let Some(piece) = s.piece_on(from) else {
            return (s, None);
        };
        let us = piece.color();

        // The target is only ever valid for the move right after a double step.
        s.set_en_passant(None);

        let position = s.position_mut();
        let captured = match mv.kind() {
            MoveKind::Quiet | MoveKind::Capture | MoveKind::DoublePush | MoveKind::Promotion => {
                position.take(from);
                position.put(to, piece)
            }
            MoveKind::EnPassant => {
                position.take(from);
                position.put(to, piece);
                // The victim stands beside the capturer, one rank short of `to`.
                to.offset(0, -us.forward()).and_then(|victim| position.take(victim))
            }
            MoveKind::Castle(side) => {
                position.take(from);
                position.put(to, piece);
                if let Some(rook) = position.take(side.rook_home(us)) {
                    position.put(side.rook_target(us), rook);
                }
                None
            }
        };

        if mv.kind() == MoveKind::DoublePush {
            s.set_en_passant(from.offset(0, us.forward()));
        }

        for color in Color::ALL {
            let rights = s.castling(color).touched(from, color).touched(to, color);
            s.set_castling(color, rights);
        }
        if let MoveKind::Castle(side) = mv.kind() {
            let rights = s.castling(us).with_rook_moved(side);
            s.set_castling(us, rights);
        }

        if mv.kind() == MoveKind::Promotion {
            s.set_pending_promotion(Some(to));
        } else {
            s.set_side_to_move(us.flip());
        }

        trace!(%mv, ?captured, "applied move");
        (s, captured)
    }

    /// Replace the pawn awaiting promotion with `promo` and pass the turn.
    ///
    /// Returns `None` when no promotion is pending.
    pub fn complete_promotion(&self, promo: PromotionPiece) -> Option<GameState> {
        let sq = self.pending_promotion()?;
        let mut s = *self;
        let us = s.side_to_move();
        s.position_mut().put(sq, Piece::new(promo.to_piece_kind(), us));
        s.set_pending_promotion(None);
        s.set_side_to_move(us.flip());
        Some(s)
    }
}
