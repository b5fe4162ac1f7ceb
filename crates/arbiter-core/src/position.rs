//! Piece placement: a 64-square mailbox.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Mapping from every square to the piece standing on it, if any.
///
/// A square holds at most one piece by construction. The whole value is
/// `Copy`, so hypothetical play works on a cheap disposable copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Option<Piece>; Square::COUNT],
}

impl Position {
    /// A board with no pieces.
    pub const EMPTY: Position = Position {
        squares: [None; Square::COUNT],
    };

    /// The standard initial layout.
    pub fn starting() -> Position {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut position = Position::EMPTY;
        for color in Color::ALL {
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                if let Some(sq) = Square::from_coords(file, color.back_rank()) {
                    position.put(sq, Piece::new(kind, color));
                }
                if let Some(sq) = Square::from_coords(file, color.pawn_rank()) {
                    position.put(sq, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        position
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Return the color of the piece on `sq`, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(Piece::color)
    }

    /// Place `piece` on `sq`, returning whatever stood there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }

    /// Empty `sq`, returning whatever stood there.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Iterate over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares holding a piece of `color`.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.color() == color)
            .map(|(sq, _)| sq)
    }

    /// Iterate over the squares holding exactly `piece`.
    pub fn find(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |&(_, p)| p == piece)
            .map(|(sq, _)| sq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::EMPTY
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pieces().map(|(sq, piece)| (sq.to_string(), piece.fen_char())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_layout() {
        let position = Position::starting();
        assert_eq!(position.piece_on(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(position.piece_on(Square::D8), Some(Piece::BLACK_QUEEN));
        assert_eq!(position.piece_on(Square::A1), Some(Piece::WHITE_ROOK));
        assert_eq!(position.piece_on(Square::G8), Some(Piece::BLACK_KNIGHT));
        assert_eq!(position.piece_on(Square::E2), Some(Piece::WHITE_PAWN));
        assert_eq!(position.piece_on(Square::E4), None);
        assert_eq!(position.pieces().count(), 32);
        assert_eq!(position.squares_of(Color::Black).count(), 16);
    }

    #[test]
    fn put_and_take() {
        let mut position = Position::EMPTY;
        assert_eq!(position.put(Square::D4, Piece::WHITE_KNIGHT), None);
        assert_eq!(position.put(Square::D4, Piece::BLACK_ROOK), Some(Piece::WHITE_KNIGHT));
        assert_eq!(position.color_on(Square::D4), Some(Color::Black));
        assert_eq!(position.take(Square::D4), Some(Piece::BLACK_ROOK));
        assert!(!position.is_occupied(Square::D4));
    }

    #[test]
    fn find_kings() {
        let position = Position::starting();
        let kings: Vec<_> = position.find(Piece::BLACK_KING).collect();
        assert_eq!(kings, [Square::E8]);
    }
}
