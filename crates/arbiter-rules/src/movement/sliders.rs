//! Rook, bishop and queen geometry with path scanning.

use arbiter_core::{PieceKind, Position, Square};

/// Return `true` if `from` and `to` lie on a line `kind` slides along.
fn aligned(kind: PieceKind, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    let orthogonal = df == 0 || dr == 0;
    let diagonal = df.abs() == dr.abs();
    match kind {
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => diagonal,
        PieceKind::Queen => orthogonal || diagonal,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
    }
}

/// Squares strictly between two squares sharing a rank, file or diagonal,
/// walked from `from` toward `to`.
///
/// Yields nothing for adjacent or unaligned pairs.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (df, dr) = from.delta(to);
    let on_line = from != to && (df == 0 || dr == 0 || df.abs() == dr.abs());
    let steps = if on_line { df.abs().max(dr.abs()) } else { 0 };
    let (step_file, step_rank) = (df.signum(), dr.signum());
    (1..steps).filter_map(move |i| from.offset(step_file * i, step_rank * i))
}

/// Return `true` if a `kind` slider on `from` can reach `to` over empty squares.
pub(super) fn reachable(kind: PieceKind, from: Square, to: Square, position: &Position) -> bool {
    from != to
        && aligned(kind, from, to)
        && squares_between(from, to).all(|sq| !position.is_occupied(sq))
}

#[cfg(test)]
mod tests {
    use super::{aligned, reachable, squares_between};
    use arbiter_core::{PieceKind, Position, Square};

    #[test]
    fn between_on_a_file() {
        let squares: Vec<_> = squares_between(Square::A1, Square::A5).collect();
        assert_eq!(squares, [Square::A2, Square::A3, Square::A4]);
    }

    #[test]
    fn between_on_a_diagonal() {
        let squares: Vec<_> = squares_between(Square::H8, Square::E5).collect();
        assert_eq!(squares, [Square::G7, Square::F6]);
    }

    #[test]
    fn between_is_reversed_when_walked_backwards() {
        for from in Square::all() {
            for to in Square::all() {
                let forward: Vec<_> = squares_between(from, to).collect();
                let mut backward: Vec<_> = squares_between(to, from).collect();
                backward.reverse();
                assert_eq!(forward, backward, "{from}-{to}");
            }
        }
    }

    #[test]
    fn adjacent_and_unaligned_are_empty() {
        assert_eq!(squares_between(Square::E4, Square::E5).count(), 0);
        assert_eq!(squares_between(Square::E4, Square::F6).count(), 0);
        assert_eq!(squares_between(Square::E4, Square::E4).count(), 0);
    }

    #[test]
    fn alignment_per_kind() {
        assert!(aligned(PieceKind::Rook, Square::A1, Square::A8));
        assert!(!aligned(PieceKind::Rook, Square::A1, Square::B2));
        assert!(aligned(PieceKind::Bishop, Square::A1, Square::H8));
        assert!(!aligned(PieceKind::Bishop, Square::A1, Square::A8));
        assert!(aligned(PieceKind::Queen, Square::D1, Square::H5));
        assert!(!aligned(PieceKind::Queen, Square::D1, Square::E3));
    }

    #[test]
    fn blocker_stops_the_slide() {
        let mut position = Position::EMPTY;
        position.put(Square::D4, arbiter_core::Piece::BLACK_PAWN);
        assert!(reachable(PieceKind::Rook, Square::D1, Square::D4, &position));
        assert!(!reachable(PieceKind::Rook, Square::D1, Square::D5, &position));
        assert!(reachable(PieceKind::Queen, Square::A1, Square::C3, &position));
        assert!(!reachable(PieceKind::Queen, Square::A1, Square::E5, &position));
    }
}
