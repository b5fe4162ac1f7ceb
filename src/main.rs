//! Replay driver: applies coordinate moves to a position and reports the result.
//!
//! ```text
//! arbiter [--fen <FEN>] [--full-search] <move>...
//! ```
//!
//! Moves are in coordinate notation (`e2e4`, `e7e8q`). Each one is validated
//! for the side to move before it is applied; the first illegal move stops
//! the replay with an error.

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use arbiter_core::{GameState, MoveKind, parse_coordinate_move};
use arbiter_rules::{Arbiter, ArbiterConfig, Verdict};

/// Parsed command-line arguments.
#[derive(Debug, Default)]
struct Args {
    fen: Option<String>,
    full_search: bool,
    moves: Vec<String>,
}

fn parse_args(mut tokens: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(token) = tokens.next() {
        match token.as_str() {
            "--fen" => {
                let fen = tokens.next().context("--fen expects a FEN string")?;
                args.fen = Some(fen);
            }
            "--full-search" => args.full_search = true,
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            _ => args.moves.push(token),
        }
    }
    Ok(args)
}

/// Validate and apply one coordinate move, finalizing a promotion with its letter.
///
/// The promotion letter is checked against the move before anything is applied,
/// so a rejected move leaves the game untouched.
fn play_move(game: &mut Arbiter, text: &str) -> Result<()> {
    let (from, to, promo) =
        parse_coordinate_move(text).with_context(|| format!("malformed move {text:?}"))?;
    let color = game.state().side_to_move();
    let mv = match game.verdict(from, to, color)? {
        Verdict::Legal(mv) => mv,
        Verdict::Illegal(reason) => {
            warn!(%text, %reason, "illegal move");
            bail!("illegal move {text}: {reason}");
        }
    };
    let promotes = mv.kind() == MoveKind::Promotion;
    match (promotes, promo) {
        (true, None) => bail!("{text} promotes; add a piece letter"),
        (false, Some(_)) => bail!("{text} does not promote; drop the piece letter"),
        _ => {}
    }

    game.apply_move(from, to)?;
    if let Some(promo) = promo {
        game.finalize_promotion(promo.to_piece_kind())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = if args.full_search {
        ArbiterConfig::full_enumeration()
    } else {
        ArbiterConfig::default()
    };

    let mut game = match &args.fen {
        Some(fen) => {
            let state: GameState = fen.parse().with_context(|| format!("invalid FEN {fen:?}"))?;
            Arbiter::from_state(state, config).context("position cannot be played from")?
        }
        None => Arbiter::with_config(config),
    };
    info!(fen = %game.state(), "replay starting");

    for text in &args.moves {
        play_move(&mut game, text)?;
    }

    let status = game.game_status()?;
    println!("{}", game.state());
    println!("{status}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_args, play_move};
    use arbiter_core::{GameState, Piece, Square};
    use arbiter_rules::{Arbiter, ArbiterConfig};

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn flags_and_moves() {
        let parsed = parse_args(args("--full-search e2e4 e7e5").into_iter()).unwrap();
        assert!(parsed.full_search);
        assert_eq!(parsed.fen, None);
        assert_eq!(parsed.moves, ["e2e4", "e7e5"]);
    }

    #[test]
    fn fen_takes_one_argument() {
        let tokens = vec!["--fen".to_string(), "4k3/8/8/8/8/8/8/4K3 w - -".to_string(), "e1e2".to_string()];
        let parsed = parse_args(tokens.into_iter()).unwrap();
        assert_eq!(parsed.fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 w - -"));
        assert_eq!(parsed.moves, ["e1e2"]);
        assert!(parse_args(args("--fen").into_iter()).is_err());
        assert!(parse_args(args("--depth 3").into_iter()).is_err());
    }

    #[test]
    fn promotion_letter_must_match_the_move() {
        let mut game = Arbiter::new();
        assert!(play_move(&mut game, "e2e4q").is_err());
        assert_eq!(*game.state(), GameState::starting_position());

        let state: GameState = "4k3/P7/8/8/8/8/8/4K3 w - -".parse().unwrap();
        let mut game = Arbiter::from_state(state, ArbiterConfig::default()).unwrap();
        assert!(play_move(&mut game, "a7a8").is_err());
        assert_eq!(*game.state(), state);
        assert_eq!(game.pending_promotion(), None);

        play_move(&mut game, "a7a8n").unwrap();
        assert_eq!(game.state().piece_on(Square::A8), Some(Piece::WHITE_KNIGHT));
        assert_eq!(game.pending_promotion(), None);
    }

    #[test]
    fn illegal_moves_leave_the_game_untouched() {
        let mut game = Arbiter::new();
        assert!(play_move(&mut game, "e2e5").is_err());
        assert!(play_move(&mut game, "e2").is_err());
        assert_eq!(*game.state(), GameState::starting_position());
        play_move(&mut game, "e2e4").unwrap();
        assert_eq!(game.state().piece_on(Square::E4), Some(Piece::WHITE_PAWN));
    }
}
