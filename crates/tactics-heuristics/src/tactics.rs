//! Tactical predicates built on the attacker enumerator and the exchange
//! evaluator: hanging pieces, favorable trades, and forks.

use tactics_core::{piece_value, BoardOracle, Color, Move, Square, SquareSet};

use crate::attackers::lva;
use crate::see::exchange_eval;

/// A piece on `square` is hanging: its owner stands to lose material if the
/// opponent starts an exchange there under optimal play. Empty squares are
/// never hanging.
pub fn is_hanging<B: BoardOracle>(board: &B, square: Square) -> bool {
    match board.color_at(square) {
        Some(color) => exchange_eval(board, !color, square, None) > 0,
        None => false,
    }
}

/// Every square occupied by `color`, except its king, where `is_hanging`.
pub fn get_hanging_pieces<B: BoardOracle>(board: &B, color: Color) -> SquareSet {
    let king = board.king(color);
    board
        .occupied_co(color)
        .iter()
        .filter(|&sq| Some(sq) != king)
        .filter(|&sq| is_hanging(board, sq))
        .collect()
}

/// A piece on `square` can be captured: either it is outright hanging, or
/// an equal-or-favorable trade is available to the opponent.
pub fn can_be_captured<B: BoardOracle>(board: &B, square: Square) -> bool {
    let Some(color) = board.color_at(square) else {
        return false;
    };
    if is_hanging(board, square) {
        return true;
    }
    match lva(board, !color, square, false) {
        Some((attacker_sq, _)) => {
            let attacker_value = piece_value(board.piece_type_at(attacker_sq));
            let defender_value = piece_value(board.piece_type_at(square));
            attacker_value <= defender_value
        }
        None => false,
    }
}

/// `square` holds a forking piece: it cannot itself be favorably captured,
/// and it attacks at least two hanging enemy pieces.
pub fn is_fork<B: BoardOracle>(board: &B, square: Square) -> bool {
    let Some(color) = board.color_at(square) else {
        return false;
    };
    if can_be_captured(board, square) {
        return false;
    }
    let enemy = !color;
    let targets = board.attacks_mask(square) & board.occupied_co(enemy);
    targets.iter().filter(|&t| is_hanging(board, t)).count() >= 2
}

/// `mv` is a forking move: after playing it, the piece on `mv.to()` cannot
/// be favorably captured and newly threatens at least two enemy pieces that
/// were not already hanging before the move.
pub fn is_forking_move<B: BoardOracle>(board: &B, mv: Move) -> bool {
    let Some(color) = board.color_at(mv.from()) else {
        return false;
    };
    let enemy = !color;
    let before: SquareSet = board.occupied_co(enemy).iter().filter(|&sq| is_hanging(board, sq)).collect();

    let after_board = board.push(mv);
    if can_be_captured(&after_board, mv.to()) {
        return false;
    }
    let targets = after_board.attacks_mask(mv.to()) & after_board.occupied_co(enemy);
    let newly_hanging = targets.iter().filter(|&t| !before.contains(t) && is_hanging(&after_board, t)).count();
    newly_hanging >= 2
}

/// Hanging pieces of `color` (mover's color, if not given) after playing `mv`.
pub fn get_hanging_after_move<B: BoardOracle>(board: &B, mv: Move, color: Option<Color>) -> SquareSet {
    let mover_color = color.unwrap_or_else(|| board.side_to_move());
    let after_board = board.push(mv);
    get_hanging_pieces(&after_board, mover_color)
}
