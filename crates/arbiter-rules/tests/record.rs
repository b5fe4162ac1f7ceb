//! Persistence record round-trips through `serde_json`.

use arbiter_core::{CastleSide, Color, PositionRecord, Square};
use arbiter_rules::{Arbiter, ArbiterConfig, RulesError};

fn replay(moves: &[(Square, Square)]) -> Arbiter {
    let mut game = Arbiter::new();
    for &(from, to) in moves {
        let color = game.state().side_to_move();
        assert!(game.validate_move(from, to, color).unwrap());
        game.apply_move(from, to).unwrap();
    }
    game
}

#[test]
fn mid_game_state_round_trips() {
    let game = replay(&[
        (Square::E2, Square::E4),
        (Square::A7, Square::A6),
        (Square::E4, Square::E5),
        (Square::D7, Square::D5),
        (Square::G1, Square::F3),
    ]);
    // The knight move cleared the en passant target; take one with it set too.
    let with_target = replay(&[(Square::E2, Square::E4), (Square::D7, Square::D5)]);

    for game in [game, with_target] {
        let record = game.to_record().unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: PositionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);

        let restored = Arbiter::from_record(&back, ArbiterConfig::default()).unwrap();
        assert_eq!(restored.state(), game.state());
    }
}

#[test]
fn castled_game_round_trips() {
    let game = replay(&[
        (Square::E2, Square::E4),
        (Square::E7, Square::E5),
        (Square::G1, Square::F3),
        (Square::B8, Square::C6),
        (Square::F1, Square::C4),
        (Square::G8, Square::F6),
        (Square::E1, Square::G1),
    ]);
    let record = game.to_record().unwrap();
    assert!(record.white_king_moved);
    assert!(record.white_kingside_rook_moved);
    assert!(!record.white_queenside_rook_moved);
    assert!(!record.black_king_moved);

    let json = serde_json::to_string(&record).unwrap();
    let back: PositionRecord = serde_json::from_str(&json).unwrap();
    let restored = Arbiter::from_record(&back, ArbiterConfig::default()).unwrap();
    assert_eq!(restored.state(), game.state());
}

#[test]
fn record_fields_are_flat() {
    let game = replay(&[(Square::E2, Square::E4)]);
    let value = serde_json::to_value(game.to_record().unwrap()).unwrap();
    assert_eq!(value["squares"].as_array().map(Vec::len), Some(64));
    assert_eq!(value["squares"][0], "R");
    assert_eq!(value["squares"][28], "P");
    assert_eq!(value["squares"][12], serde_json::Value::Null);
    assert_eq!(value["side_to_move"], "black");
    assert_eq!(value["en_passant"], "e3");
    assert_eq!(value["white_king_moved"], false);
}

#[test]
fn tampered_records_are_refused() {
    let mut record = Arbiter::new().to_record().unwrap();
    record.squares[4] = None;
    assert!(matches!(
        Arbiter::from_record(&record, ArbiterConfig::default()),
        Err(RulesError::Record(_))
    ));

    let mut record = Arbiter::new().to_record().unwrap();
    record.squares.pop();
    assert!(Arbiter::from_record(&record, ArbiterConfig::default()).is_err());

    let mut record = Arbiter::new().to_record().unwrap();
    record.en_passant = Some(Square::E6);
    assert!(Arbiter::from_record(&record, ArbiterConfig::default()).is_err());

    let mut record = Arbiter::new().to_record().unwrap();
    record.side_to_move = Color::Black;
    record.white_kingside_rook_moved = true;
    let game = Arbiter::from_record(&record, ArbiterConfig::default()).unwrap();
    assert!(game.state().castling(Color::White).rook_moved(CastleSide::KingSide));
}

#[test]
fn json_with_a_bad_square_name_does_not_parse() {
    let mut value = serde_json::to_value(Arbiter::new().to_record().unwrap()).unwrap();
    value["en_passant"] = serde_json::Value::from("z9");
    assert!(serde_json::from_value::<PositionRecord>(value).is_err());
}
