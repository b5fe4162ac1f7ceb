//! Pawn geometry: pushes, double steps, captures and en passant.

use arbiter_core::{Color, GameState, MoveKind, Square};

use crate::special;

/// Classify a pawn move from `from` to `to` for a pawn of `color`.
pub(super) fn classify(state: &GameState, from: Square, to: Square, color: Color) -> Option<MoveKind> {
    let position = state.position();
    let (df, dr) = from.delta(to);
    let forward = color.forward();
    let promotes = special::is_promotion_square(to, color);

    if df == 0 {
        if dr == forward && !position.is_occupied(to) {
            return Some(if promotes { MoveKind::Promotion } else { MoveKind::Quiet });
        }
        if dr == 2 * forward && from.rank() == color.pawn_rank() {
            let skipped = from.offset(0, forward)?;
            if !position.is_occupied(skipped) && !position.is_occupied(to) {
                return Some(MoveKind::DoublePush);
            }
        }
        return None;
    }

    if df.abs() == 1 && dr == forward {
        if position.color_on(to) == Some(color.flip()) {
            return Some(if promotes { MoveKind::Promotion } else { MoveKind::Capture });
        }
        if special::en_passant_capture(state, from, to, color) {
            return Some(MoveKind::EnPassant);
        }
    }
    None
}

/// Return `true` if a pawn of `color` on `from` attacks `to`.
#[inline]
pub(super) fn attacks(from: Square, to: Square, color: Color) -> bool {
    let (df, dr) = from.delta(to);
    df.abs() == 1 && dr == color.forward()
}

#[cfg(test)]
mod tests {
    use super::classify;
    use arbiter_core::{Color, GameState, MoveKind, Square};

    #[test]
    fn three_square_advance_is_never_reachable() {
        let state = GameState::starting_position();
        assert_eq!(classify(&state, Square::E2, Square::E5, Color::White), None);
    }

    #[test]
    fn pawns_never_move_backwards_or_sideways() {
        let state: GameState = "4k3/8/8/8/4P3/8/8/4K3 w - -".parse().unwrap();
        assert_eq!(classify(&state, Square::E4, Square::E3, Color::White), None);
        assert_eq!(classify(&state, Square::E4, Square::D4, Color::White), None);
        assert_eq!(classify(&state, Square::E4, Square::E5, Color::White), Some(MoveKind::Quiet));
    }

    #[test]
    fn double_step_only_from_start_rank_over_empty_squares() {
        let state: GameState = "4k3/8/8/8/8/4n3/3P4/4K3 w - -".parse().unwrap();
        assert_eq!(
            classify(&state, Square::D2, Square::D4, Color::White),
            Some(MoveKind::DoublePush)
        );
        let blocked: GameState = "4k3/8/8/8/8/3n4/3P4/4K3 w - -".parse().unwrap();
        assert_eq!(classify(&blocked, Square::D2, Square::D4, Color::White), None);
        assert_eq!(classify(&blocked, Square::D2, Square::D3, Color::White), None);
        let moved: GameState = "4k3/8/8/8/8/3P4/8/4K3 w - -".parse().unwrap();
        assert_eq!(classify(&moved, Square::D3, Square::D5, Color::White), None);
    }

    #[test]
    fn black_pawns_advance_downward() {
        let state = GameState::starting_position();
        assert_eq!(
            classify(&state, Square::D7, Square::D5, Color::Black),
            Some(MoveKind::DoublePush)
        );
        assert_eq!(classify(&state, Square::D7, Square::D6, Color::Black), Some(MoveKind::Quiet));
    }

    #[test]
    fn diagonal_needs_an_enemy() {
        let state: GameState = "4k3/8/8/3p1P2/4P3/8/8/4K3 w - -".parse().unwrap();
        assert_eq!(classify(&state, Square::E4, Square::D5, Color::White), Some(MoveKind::Capture));
        assert_eq!(classify(&state, Square::E4, Square::F5, Color::White), None);
    }

    #[test]
    fn reaching_the_last_rank_promotes() {
        let state: GameState = "1r2k3/P7/8/8/8/8/8/4K3 w - -".parse().unwrap();
        assert_eq!(
            classify(&state, Square::A7, Square::A8, Color::White),
            Some(MoveKind::Promotion)
        );
        assert_eq!(
            classify(&state, Square::A7, Square::B8, Color::White),
            Some(MoveKind::Promotion)
        );
    }

    #[test]
    fn en_passant_onto_the_target() {
        let state: GameState = "4k3/8/8/3pP3/8/8/8/4K3 w - d6".parse().unwrap();
        assert_eq!(
            classify(&state, Square::E5, Square::D6, Color::White),
            Some(MoveKind::EnPassant)
        );
        let expired: GameState = "4k3/8/8/3pP3/8/8/8/4K3 w - -".parse().unwrap();
        assert_eq!(classify(&expired, Square::E5, Square::D6, Color::White), None);
    }
}
