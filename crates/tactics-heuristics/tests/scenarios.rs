//! End-to-end scenarios exercising the full tactical pipeline (attacker
//! enumeration, SEE, predicates, classifiers) against fixed positions,
//! rather than the individual-unit-level tests colocated with each module.

use tactics_core::{parse_fen, Color, Move, Score, Square};
use tactics_heuristics::{
    attackers_of, capture_exchange_eval, hanging_piece_not_captured, hung_mate_n,
    hung_moved_piece, is_fork, is_hanging, lva, missed_fork, started_bad_trade,
};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}

#[test]
fn pawn_hangs() {
    let board = parse_fen("1k6/8/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
    assert!(is_hanging(&board, sq("e5")));
    assert_eq!(capture_exchange_eval(&board, mv("c3", "e5")), 1);
    assert_eq!(capture_exchange_eval(&board, mv("c3", "d4")), -3);
}

#[test]
fn pawn_defended() {
    let board = parse_fen("1k6/6b1/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
    assert!(!is_hanging(&board, sq("e5")));
    assert_eq!(capture_exchange_eval(&board, mv("c3", "e5")), -2);
}

#[test]
fn mixed_battery() {
    let board = parse_fen("k3r3/4q3/8/1R2p3/8/2B5/8/1K6 w - - 0 1").unwrap();
    assert_eq!(capture_exchange_eval(&board, mv("c3", "e5")), 1);
    assert_eq!(capture_exchange_eval(&board, mv("b5", "e5")), 1);
}

#[test]
fn own_king_in_check_non_king_cannot_capture() {
    let board = parse_fen("1k6/1r6/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
    assert!(attackers_of(&board, Color::White, sq("e5"), false).is_empty());
    assert!(!is_hanging(&board, sq("e5")));
}

#[test]
fn king_escapes_double_check_via_capture() {
    let board = parse_fen("1k6/1r6/8/8/4B3/8/2p5/1K6 w - - 0 1").unwrap();
    let attackers = attackers_of(&board, Color::White, sq("c2"), false);
    assert_eq!(attackers, sq("b1").bitboard());
}

#[test]
fn simple_knight_fork() {
    let board = parse_fen("k7/8/1q3r2/3N4/8/8/2K5/8 w - - 0 1").unwrap();
    assert!(is_fork(&board, sq("d5")));
}

#[test]
fn promotion_capture() {
    let board = parse_fen("4n2r/1k1P4/8/8/8/8/1K6/8 w - - 0 1").unwrap();
    assert_eq!(capture_exchange_eval(&board, mv("d7", "e8")), 2);
}

#[test]
fn nimzowitsch_tarrasch_position() {
    let board = parse_fen("3rr1k1/p4p1p/6p1/2p5/3PN3/1P3P2/PBQ2Kb1/2R2R1q b - - 4 24").unwrap();
    let (from, _) = lva(&board, Color::Black, sq("f1"), false).unwrap();
    assert_eq!(from, sq("g2"));
    assert_eq!(capture_exchange_eval(&board, mv("g2", "f1")), 2);
    assert_eq!(capture_exchange_eval(&board, mv("h1", "f1")), -2);
}

#[test]
fn hanging_piece_not_captured_end_to_end() {
    let board = parse_fen("1k6/8/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
    assert!(hanging_piece_not_captured(&board, mv("c3", "b2"), &[mv("c3", "e5")]));
}

#[test]
fn hung_moved_piece_end_to_end() {
    let board = parse_fen("1k6/6b1/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
    assert!(hung_moved_piece(&board, mv("c3", "d4"), None));
}

#[test]
fn started_bad_trade_end_to_end() {
    let board = parse_fen("1k6/6b1/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
    assert!(started_bad_trade(&board, mv("c3", "e5"), None));
}

#[test]
fn missed_fork_end_to_end() {
    let board = parse_fen("k7/8/1q3r2/8/8/4N3/2K5/8 w - - 0 1").unwrap();
    assert!(missed_fork(&board, mv("e3", "c4"), &[mv("e3", "d5")]));
}

#[test]
fn hung_mate_classifier() {
    assert!(hung_mate_n(Score::mate(-1), Score::cp(0), 1));
    assert!(!hung_mate_n(Score::mate(-2), Score::mate(-4), 1));
}
