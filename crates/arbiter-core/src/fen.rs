//! FEN parsing and printing for [`GameState`].
//!
//! Move counters are accepted for compatibility but not tracked, so printing
//! emits the four placement/turn/castling/en-passant fields only.

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::{CastleSide, CastlingRights};
use crate::color::Color;
use crate::error::FenError;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<GameState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 4 && fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let position = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = parse_castling(fields[2])?;

        let en_passant = match fields[3] {
            "-" => None,
            text => Some(Square::from_algebraic(text).ok_or_else(|| {
                FenError::InvalidEnPassant {
                    found: text.to_string(),
                }
            })?),
        };

        for counter in fields.iter().skip(4) {
            counter.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
                found: counter.to_string(),
            })?;
        }

        Ok(GameState::from_parts(position, side_to_move, castling, en_passant)?)
    }
}

fn parse_placement(placement: &str) -> Result<Position, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut position = Position::EMPTY;
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // FEN lists rank 8 first.
        let rank = 7 - rank_index as u8;
        let mut file: u8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += digit as u8;
                if file > 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: file as usize,
                    });
                }
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::from_coords(file, rank).ok_or(FenError::BadRankLength {
                rank_index,
                length: file as usize + 1,
            })?;
            position.put(sq, piece);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file as usize,
            });
        }
    }
    Ok(position)
}

/// Map FEN castling letters onto move history.
///
/// A missing letter marks that rook as moved; a color with no letters at all
/// has its king marked as moved, since FEN cannot tell the two apart.
fn parse_castling(field: &str) -> Result<[CastlingRights; Color::COUNT], FenError> {
    let mut allowed = [[false; 2]; Color::COUNT];
    if field != "-" {
        for c in field.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::KingSide),
                'Q' => (Color::White, CastleSide::QueenSide),
                'k' => (Color::Black, CastleSide::KingSide),
                'q' => (Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            let slot = &mut allowed[color.index()][side as usize];
            if *slot {
                return Err(FenError::InvalidCastlingChar { character: c });
            }
            *slot = true;
        }
    }

    Ok(allowed.map(|[kingside, queenside]| {
        CastlingRights::from_flags(!kingside && !queenside, !kingside, !queenside)
    }))
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty_count = 0u8;
            for file in 0u8..8 {
                match Square::from_coords(file, rank).and_then(|sq| self.piece_on(sq)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {}", self.side_to_move())?;

        let castling: String = Color::ALL
            .into_iter()
            .map(|color| self.castling(color).fen_letters(color))
            .collect();
        if castling.is_empty() {
            write!(f, " -")?;
        } else {
            write!(f, " {castling}")?;
        }

        match self.en_passant() {
            Some(sq) => write!(f, " {sq}"),
            None => write!(f, " -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::castle_rights::CastleSide;
    use crate::color::Color;
    use crate::error::{FenError, StateError};
    use crate::game_state::GameState;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn parse_starting_fen() {
        let state: GameState = STARTING_FEN.parse().unwrap();
        assert_eq!(state, GameState::starting_position());
    }

    #[test]
    fn print_starting_fen() {
        assert_eq!(
            GameState::starting_position().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
        );
    }

    #[test]
    fn roundtrip_positions() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6",
            "r3k2r/8/8/8/8/8/8/R3K2R b Kq -",
        ];
        for fen in fens {
            let state: GameState = fen.parse().unwrap();
            assert_eq!(state.to_string(), fen);
        }
    }

    #[test]
    fn partial_castling_letters() {
        let state: GameState = "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1".parse().unwrap();
        let white = state.castling(Color::White);
        assert!(white.allows(CastleSide::KingSide));
        assert!(!white.allows(CastleSide::QueenSide));
        assert!(!white.king_moved());
        let black = state.castling(Color::Black);
        assert!(!black.allows(CastleSide::KingSide));
        assert!(black.allows(CastleSide::QueenSide));
    }

    #[test]
    fn counters_are_checked_and_dropped() {
        let state: GameState = "4k3/8/8/8/8/8/8/4K3 b - - 12 40".parse().unwrap();
        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(state.piece_on(Square::E8), Some(Piece::BLACK_KING));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 b - - x 40".parse::<GameState>(),
            Err(FenError::InvalidMoveCounter { .. })
        ));
    }

    #[test]
    fn malformed_fens() {
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w".parse::<GameState>(),
            Err(FenError::WrongFieldCount { found: 2 })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/4K3 w - -".parse::<GameState>(),
            Err(FenError::WrongRankCount { found: 7 })
        ));
        assert!(matches!(
            "4k3/9/8/8/8/8/8/4K3 w - -".parse::<GameState>(),
            Err(FenError::InvalidPieceChar { character: '9' })
        ));
        assert!(matches!(
            "4k4/8/8/8/8/8/8/4K3 w - -".parse::<GameState>(),
            Err(FenError::BadRankLength { .. })
        ));
        let long_rank = format!("4k3/{}/8/8/8/8/8/4K3 w - -", "8".repeat(33));
        assert!(matches!(
            long_rank.parse::<GameState>(),
            Err(FenError::BadRankLength { rank_index: 1, length: 16 })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 x - -".parse::<GameState>(),
            Err(FenError::InvalidColor { .. })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w KK -".parse::<GameState>(),
            Err(FenError::InvalidCastlingChar { character: 'K' })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w - z9".parse::<GameState>(),
            Err(FenError::InvalidEnPassant { .. })
        ));
    }

    #[test]
    fn castling_letters_must_match_placement() {
        let err = "4k3/8/8/8/8/8/8/4K3 w K -".parse::<GameState>().unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidState {
                source: StateError::RookNotHome {
                    color: Color::White,
                    side: CastleSide::KingSide
                }
            }
        );
    }
}
