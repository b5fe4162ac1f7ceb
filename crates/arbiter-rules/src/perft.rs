//! Perft (performance test) for move legality verification.
//!
//! Counts are taken over the validator's full enumeration, so they check the
//! movement rules, the special moves and king safety together.

use arbiter_core::{GameState, Move, MoveKind, PromotionPiece};

use crate::error::RulesError;
use crate::status::legal_moves;

/// States reached by playing `mv`; a promotion fans out into one per piece.
fn children(state: &GameState, mv: Move) -> Result<Vec<GameState>, RulesError> {
    let (after, _) = state.make_move(mv);
    if mv.kind() != MoveKind::Promotion {
        return Ok(vec![after]);
    }
    PromotionPiece::ALL
        .into_iter()
        .map(|promo| after.complete_promotion(promo).ok_or(RulesError::NoPendingPromotion))
        .collect()
}

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position).
pub fn perft(state: &GameState, depth: usize) -> Result<u64, RulesError> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0u64;
    for mv in legal_moves(state)? {
        if depth == 1 && mv.kind() != MoveKind::Promotion {
            nodes += 1;
            continue;
        }
        for child in children(state, mv)? {
            nodes += perft(&child, depth - 1)?;
        }
    }
    Ok(nodes)
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(coordinate_move, node_count)` pairs sorted alphabetically. A
/// promotion is listed once with the nodes of all four pieces combined.
pub fn divide(state: &GameState, depth: usize) -> Result<Vec<(String, u64)>, RulesError> {
    let mut results = Vec::new();
    for mv in legal_moves(state)? {
        let mut count = 0u64;
        for child in children(state, mv)? {
            count += perft(&child, depth.saturating_sub(1))?;
        }
        results.push((mv.to_coordinate(), count));
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}
