//! Castling, en passant and promotion.
//!
//! Eligibility lives here; the mechanical relocation of pieces is done by
//! [`GameState::make_move`] once a move has been classified.

use arbiter_core::{
    CastleSide, Color, GameState, Piece, PieceKind, PromotionPiece, Square, king_home,
};
use tracing::debug;

use crate::attack;
use crate::error::RulesError;
use crate::movement::squares_between;

/// Which side a king move from `from` to `to` castles toward, if it has castling shape.
pub fn castle_side_for(from: Square, to: Square, color: Color) -> Option<CastleSide> {
    if from != king_home(color) {
        return None;
    }
    CastleSide::ALL
        .into_iter()
        .find(|side| side.king_target(color) == to)
}

/// Return `true` if `color` may castle toward `side` right now.
///
/// Neither the king nor that rook may have moved, the squares between them
/// must be empty, and the king may not start on, cross, or land on an
/// attacked square. Attacks are read geometrically so this never recurses
/// into move validation.
pub fn can_castle(state: &GameState, color: Color, side: CastleSide) -> bool {
    if !state.castling(color).allows(side) {
        return false;
    }

    let position = state.position();
    let king_from = king_home(color);
    let rook_from = side.rook_home(color);
    if position.piece_on(king_from) != Some(Piece::new(PieceKind::King, color))
        || position.piece_on(rook_from) != Some(Piece::new(PieceKind::Rook, color))
    {
        return false;
    }

    if squares_between(king_from, rook_from).any(|sq| position.is_occupied(sq)) {
        return false;
    }

    let them = color.flip();
    [king_from, side.rook_target(color), side.king_target(color)]
        .into_iter()
        .all(|sq| !attack::is_attacked(position, sq, them))
}

/// Square of the pawn an en passant capture onto `target` by `color` removes.
pub fn en_passant_victim(target: Square, color: Color) -> Option<Square> {
    target.offset(0, -color.forward())
}

/// Return `true` if a pawn of `color` on `from` may capture en passant onto `to`.
pub fn en_passant_capture(state: &GameState, from: Square, to: Square, color: Color) -> bool {
    let Some(target) = state.en_passant() else {
        return false;
    };
    if to != target {
        return false;
    }
    let (df, dr) = from.delta(target);
    if df.abs() != 1 || dr != color.forward() {
        return false;
    }
    en_passant_victim(target, color)
        .and_then(|sq| state.piece_on(sq))
        .is_some_and(|piece| piece == Piece::new(PieceKind::Pawn, color.flip()))
}

/// Return `true` if a pawn of `color` arriving on `to` must promote.
#[inline]
pub fn is_promotion_square(to: Square, color: Color) -> bool {
    to.rank() == color.promotion_rank()
}

/// Replace the pending promotion pawn with a piece of `kind` and pass the turn.
pub fn finalize_promotion(state: &GameState, kind: PieceKind) -> Result<GameState, RulesError> {
    let promo = PromotionPiece::from_piece_kind(kind).ok_or(RulesError::InvalidPromotion { kind })?;
    let square = state.pending_promotion().ok_or(RulesError::NoPendingPromotion)?;
    let next = state.complete_promotion(promo).ok_or(RulesError::NoPendingPromotion)?;
    debug!(%square, %kind, "promotion finalized");
    Ok(next)
}
