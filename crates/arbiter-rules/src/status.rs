//! Checkmate and stalemate detection.
//!
//! Full enumeration of (own piece, destination) pairs through the validator
//! is the reference semantics. While in check, the restricted search only
//! tries moves that could possibly resolve it; the two always agree.

use std::fmt;

use arbiter_core::{Color, GameState, Move, Square, StateError};
use tracing::{debug, info};

use crate::check;
use crate::config::EvasionSearch;
use crate::movement::squares_between;
use crate::special;
use crate::validator::{self, Verdict};

/// Three-way game classification for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Play continues. The side to move may be in check.
    Ongoing,
    /// The given color is checkmated.
    Checkmate(Color),
    /// The given color has no legal move but is not in check.
    Stalemate(Color),
}

impl GameStatus {
    /// Return `true` for checkmate and stalemate.
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Checkmate(color) => write!(f, "checkmate ({})", color.name()),
            GameStatus::Stalemate(color) => write!(f, "stalemate ({})", color.name()),
        }
    }
}

/// Every legal move for the side to move, in square order.
///
/// A promotion appears once; the piece is chosen when it is finalized.
pub fn legal_moves(state: &GameState) -> Result<Vec<Move>, StateError> {
    let color = state.side_to_move();
    let mut moves = Vec::new();
    for from in state.position().squares_of(color) {
        for to in Square::all() {
            if let Verdict::Legal(mv) = validator::validate(state, from, to, color)? {
                moves.push(mv);
            }
        }
    }
    Ok(moves)
}

/// Return `true` if `color` has at least one legal move.
pub fn has_legal_move(state: &GameState, color: Color) -> Result<bool, StateError> {
    for from in state.position().squares_of(color) {
        for to in Square::all() {
            if validator::validate(state, from, to, color)?.is_legal() {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Return `true` if `color`, currently in check, has a move that resolves it.
///
/// Only king moves can answer a double check. A single check can also be
/// answered by capturing the checker, by blocking a sliding checker, or by
/// capturing a checking pawn en passant.
pub fn has_evasion(state: &GameState, color: Color) -> Result<bool, StateError> {
    let king = check::king_square(state.position(), color)?;
    for (df, dr) in KING_STEPS {
        if let Some(to) = king.offset(df, dr)
            && validator::validate(state, king, to, color)?.is_legal()
        {
            return Ok(true);
        }
    }

    let checkers = check::checkers(state, color)?;
    let [checker] = checkers.as_slice() else {
        return Ok(false);
    };

    let mut targets: Vec<Square> = squares_between(king, *checker).collect();
    targets.push(*checker);
    if let Some(target) = state.en_passant()
        && special::en_passant_victim(target, color) == Some(*checker)
    {
        targets.push(target);
    }

    for from in state.position().squares_of(color).filter(|&sq| sq != king) {
        for &to in &targets {
            if validator::validate(state, from, to, color)?.is_legal() {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Classify the position for the side to move.
///
/// Fails if a king is missing or duplicated, or if a promotion is still
/// waiting for its piece.
pub fn classify(state: &GameState, search: EvasionSearch) -> Result<GameStatus, StateError> {
    if let Some(square) = state.pending_promotion() {
        return Err(StateError::PromotionPending { square });
    }

    let color = state.side_to_move();
    let checked = check::in_check(state, color)?;
    let can_move = match (checked, search) {
        (true, EvasionSearch::Restricted) => has_evasion(state, color)?,
        _ => has_legal_move(state, color)?,
    };

    let status = match (checked, can_move) {
        (_, true) => GameStatus::Ongoing,
        (true, false) => GameStatus::Checkmate(color),
        (false, false) => GameStatus::Stalemate(color),
    };

    debug!(?color, checked, ?search, %status, "classified position");
    if status.is_over() {
        info!(%status, "game over");
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::{GameStatus, classify, has_evasion, has_legal_move, legal_moves};
    use crate::check;
    use crate::config::EvasionSearch;
    use arbiter_core::{Color, GameState, Move, MoveKind, Square};

    fn status(fen: &str) -> GameStatus {
        let state: GameState = fen.parse().unwrap();
        let restricted = classify(&state, EvasionSearch::Restricted).unwrap();
        let full = classify(&state, EvasionSearch::FullEnumeration).unwrap();
        assert_eq!(restricted, full, "searches disagree on {fen}");
        restricted
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let state = GameState::starting_position();
        assert_eq!(legal_moves(&state).unwrap().len(), 20);
        assert_eq!(status(&state.to_string()), GameStatus::Ongoing);
    }

    #[test]
    fn queen_mate_from_h5() {
        let fen = "rnbqkbnr/ppppp2p/5p2/6pQ/4P3/8/PPPP1PPP/RNB1KBNR b KQkq -";
        assert_eq!(status(fen), GameStatus::Checkmate(Color::Black));
    }

    #[test]
    fn scholars_mate() {
        let fen = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq -";
        assert_eq!(status(fen), GameStatus::Checkmate(Color::Black));
    }

    #[test]
    fn back_rank_mate() {
        assert_eq!(status("3R2k1/5ppp/8/8/8/8/8/6K1 b - -"), GameStatus::Checkmate(Color::Black));
    }

    #[test]
    fn check_that_can_be_blocked_is_not_mate() {
        assert_eq!(status("3R2k1/5ppp/8/8/8/8/4r3/6K1 b - -"), GameStatus::Ongoing);
    }

    #[test]
    fn queen_stalemate() {
        assert_eq!(status("7k/5Q2/6K1/8/8/8/8/8 b - -"), GameStatus::Stalemate(Color::Black));
    }

    #[test]
    fn pinned_pieces_can_leave_no_move() {
        // The knight is pinned and the king is boxed in.
        assert_eq!(status("8/8/8/8/8/1k6/8/KN5r w - -"), GameStatus::Stalemate(Color::White));
        assert_eq!(status("7k/8/8/8/8/8/6rb/K6q w - -"), GameStatus::Checkmate(Color::White));
    }

    #[test]
    fn restricted_search_agrees_on_checked_positions() {
        let checked = [
            // Mates.
            "rnbqkbnr/ppppp2p/5p2/6pQ/4P3/8/PPPP1PPP/RNB1KBNR b KQkq -",
            "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq -",
            "3R2k1/5ppp/8/8/8/8/8/6K1 b - -",
            // Double check, king must move.
            "4k3/8/3N4/8/8/8/8/4RK2 b - -",
            // Double check with nowhere to go.
            "3qkb2/3p1p2/3N4/8/8/8/8/4RK2 b - -",
            // Block available.
            "3R2k1/5ppp/8/8/8/8/4r3/6K1 b - -",
            // Capture of the checker available.
            "3R2k1/5ppp/8/8/8/8/3r4/6K1 b - -",
            // Checking pawn removed en passant.
            "8/8/8/2k5/3Pp3/8/8/K7 b - d3",
            "8/8/8/4k3/3Pp3/8/8/K7 b - d3",
            "8/8/1ppp4/1pkp4/1ppPp3/2P5/8/K7 b - d3",
        ];
        for fen in checked {
            let state: GameState = fen.parse().unwrap();
            let color = state.side_to_move();
            assert!(check::in_check(&state, color).unwrap(), "{fen} is not check");
            assert_eq!(
                has_evasion(&state, color).unwrap(),
                has_legal_move(&state, color).unwrap(),
                "searches disagree on {fen}"
            );
        }
    }

    #[test]
    fn en_passant_is_the_only_evasion() {
        // The king is boxed in by its own pawns and the checker is defended.
        let fen = "8/8/1ppp4/1pkp4/1ppPp3/2P5/8/K7 b - d3";
        let state: GameState = fen.parse().unwrap();
        assert!(check::in_check(&state, Color::Black).unwrap());
        assert!(has_evasion(&state, Color::Black).unwrap());
        assert_eq!(status(fen), GameStatus::Ongoing);

        let moves = legal_moves(&state).unwrap();
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.kind() == MoveKind::EnPassant));
    }

    #[test]
    fn pending_promotion_blocks_classification() {
        let state: GameState = "4k3/P7/8/8/8/8/8/4K3 w - -".parse().unwrap();
        let (promoting, _) = state.make_move(Move::new(Square::A7, Square::A8, MoveKind::Promotion));
        assert!(classify(&promoting, EvasionSearch::Restricted).is_err());
    }
}
