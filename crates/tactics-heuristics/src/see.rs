//! Static Exchange Evaluation: the material outcome of a capture sequence
//! on one square, assuming both sides keep recapturing with their least
//! valuable attacker for as long as doing so is profitable.

use tactics_core::{piece_value, BoardOracle, Color, Move, Square};
use tracing::trace;

use crate::attackers::lva;

/// Material swing on `square` if `color` were to start an exchange there
/// and both sides play optimally, given `color` is not forced to start.
/// Never negative: `color` simply declines when continuing is unprofitable.
///
/// `promotion_value`, when given, substitutes the value of the capturing
/// pawn's promoted piece in place of the first captured value, matching the
/// caller's way of saying "this capture doubles as a promotion."
pub fn exchange_eval<B: BoardOracle>(
    board: &B,
    color: Color,
    square: Square,
    promotion_value: Option<i32>,
) -> i32 {
    let opponent_king_in_check = match board.king(!color) {
        Some(king_sq) => !board.attackers(color, king_sq).is_empty(),
        None => false,
    };
    trace!(?color, ?square, opponent_king_in_check, "exchange_eval start");
    exchange_eval_recursive(board, color, square, opponent_king_in_check, promotion_value, true)
}

fn exchange_eval_recursive<B: BoardOracle>(
    board: &B,
    color: Color,
    square: Square,
    ignore_check: bool,
    promotion_value: Option<i32>,
    is_outermost: bool,
) -> i32 {
    let Some((from, _)) = lva(board, color, square, ignore_check) else {
        return 0;
    };
    let mv = Move::new(from, square);
    let captured = move_captured_value(board, mv);
    let next_board = board.push(mv);
    let recapture = exchange_eval_recursive(&next_board, !color, square, ignore_check, None, false);

    if captured < recapture {
        return 0;
    }
    let effective_captured = if is_outermost {
        promotion_value.unwrap_or(captured)
    } else {
        captured
    };
    effective_captured - recapture
}

/// Material swing from playing `move`, which is forced (the capture has
/// already happened); may be negative when the capture was a blunder.
pub fn capture_exchange_eval<B: BoardOracle>(board: &B, mv: Move) -> i32 {
    let Some(color) = board.color_at(mv.from()) else {
        return 0;
    };
    let captured = move_captured_value(board, mv);
    let attacker_value = piece_value(board.piece_type_at(mv.from()));
    let next_board = board.push(mv);
    let swing = exchange_eval(&next_board, !color, mv.to(), Some(attacker_value));
    trace!(?mv, captured, swing, "capture_exchange_eval");
    captured - swing
}

/// Material value captured by playing `mv` on `board`: the en-passant
/// pawn's value for an e.p. capture, otherwise whatever sits on `mv.to()`.
pub fn move_captured_value<B: BoardOracle>(board: &B, mv: Move) -> i32 {
    if board.is_en_passant(mv) {
        tactics_core::PieceType::Pawn.value()
    } else {
        piece_value(board.piece_type_at(mv.to()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::parse_fen;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::new(sq(from), sq(to))
    }

    #[test]
    fn pawn_hangs() {
        let board = parse_fen("1k6/8/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
        assert_eq!(capture_exchange_eval(&board, mv("c3", "e5")), 1);
        assert_eq!(capture_exchange_eval(&board, mv("c3", "d4")), -3);
    }

    #[test]
    fn pawn_defended() {
        let board = parse_fen("1k6/6b1/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
        assert_eq!(capture_exchange_eval(&board, mv("c3", "e5")), -2);
    }

    #[test]
    fn mixed_battery() {
        let board = parse_fen("k3r3/4q3/8/1R2p3/8/2B5/8/1K6 w - - 0 1").unwrap();
        assert_eq!(capture_exchange_eval(&board, mv("c3", "e5")), 1);
        assert_eq!(capture_exchange_eval(&board, mv("b5", "e5")), 1);
    }

    #[test]
    fn own_king_in_check_has_no_legal_attacker() {
        let board = parse_fen("1k6/1r6/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
        assert_eq!(exchange_eval(&board, Color::White, sq("e5"), None), 0);
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
}
