//! Mistake classifiers: total predicates over *(board, move, hints)* that
//! name the tactical error pattern a move exhibits, if any.

use tactics_core::{BoardOracle, Move, Score, SquareSet};
use tracing::trace;

use crate::see::{capture_exchange_eval, move_captured_value};
use crate::tactics::{get_hanging_after_move, get_hanging_pieces, is_forking_move, is_hanging};

/// A move left a hanging target uncaptured while a suggested move would
/// have taken one.
pub fn hanging_piece_not_captured<B: BoardOracle>(board: &B, mv: Move, best_moves: &[Move]) -> bool {
    if is_hanging(board, mv.to()) {
        return false;
    }
    best_moves.iter().any(|m| is_hanging(board, m.to()))
}

/// A non-capturing move walked a piece into a losing exchange.
pub fn hung_moved_piece<B: BoardOracle>(board: &B, mv: Move, best_opponent_moves: Option<&[Move]>) -> bool {
    if board.is_capture(mv) {
        return false;
    }
    if let Some(replies) = best_opponent_moves {
        if !replies.iter().any(|r| r.to() == mv.to()) {
            return false;
        }
    }
    capture_exchange_eval(board, mv) < 0
}

/// A capturing move started a losing exchange.
pub fn started_bad_trade<B: BoardOracle>(board: &B, mv: Move, best_opponent_moves: Option<&[Move]>) -> bool {
    if !board.is_capture(mv) {
        return false;
    }
    if let Some(replies) = best_opponent_moves {
        if !replies.iter().any(|r| r.to() == mv.to()) {
            return false;
        }
    }
    capture_exchange_eval(board, mv) < 0
}

fn newly_hanging_value<B: BoardOracle>(board: &B, mv: Move) -> i32 {
    let mover_color = board.color_at(mv.from()).unwrap_or_else(|| board.side_to_move());
    let before: SquareSet = get_hanging_pieces(board, mover_color);
    let after_board = board.push(mv);
    get_hanging_after_move(board, mv, Some(mover_color))
        .iter()
        .filter(|&sq| sq != mv.from() && sq != mv.to() && !before.contains(sq))
        .map(|sq| crate::see::exchange_eval(&after_board, !mover_color, sq, None))
        .max()
        .unwrap_or(0)
}

/// A move, while resolving its own business, left a *different* piece
/// newly hanging.
pub fn hung_other_piece<B: BoardOracle>(board: &B, mv: Move, best_moves: Option<&[Move]>) -> bool {
    let nh = newly_hanging_value(board, mv);
    if nh <= 0 {
        return false;
    }
    match best_moves {
        Some(moves) if !moves.is_empty() => {
            let min_nh = moves.iter().map(|m| newly_hanging_value(board, *m)).min().unwrap();
            min_nh < nh
        }
        _ => true,
    }
}

fn hanging_after_move_value<B: BoardOracle>(board: &B, mv: Move) -> i32 {
    let mover_color = board.color_at(mv.from()).unwrap_or_else(|| board.side_to_move());
    let after_board = board.push(mv);
    get_hanging_after_move(board, mv, Some(mover_color))
        .iter()
        .map(|sq| crate::see::exchange_eval(&after_board, !mover_color, sq, None))
        .max()
        .unwrap_or(0)
}

fn hanging_cost<B: BoardOracle>(board: &B, mv: Move) -> i32 {
    hanging_after_move_value(board, mv) - move_captured_value(board, mv)
}

/// A piece was already hanging and the move did not address it — it is
/// not the piece that was hanging, and the position afterward is worse
/// than what the suggested moves would have left.
pub fn left_piece_hanging<B: BoardOracle>(board: &B, mv: Move, best_moves: Option<&[Move]>) -> bool {
    if let Some(moves) = best_moves {
        if moves.contains(&mv) {
            return false;
        }
    }
    let mover_color = board.color_at(mv.from()).unwrap_or_else(|| board.side_to_move());
    let hanging_before = get_hanging_pieces(board, mover_color);
    if hanging_before.is_empty() {
        return false;
    }
    if hanging_before.count() == 1 && hanging_before.contains(mv.from()) {
        return false;
    }

    let cost = hanging_cost(board, mv);
    let optimum = match best_moves {
        Some(moves) if !moves.is_empty() => {
            let min_cost = moves.iter().map(|m| hanging_cost(board, *m)).min().unwrap();
            min_cost.max(0)
        }
        _ => 0,
    };
    optimum < cost
}

/// A move was not a forking move, but a suggested move was.
pub fn missed_fork<B: BoardOracle>(board: &B, mv: Move, best_moves: &[Move]) -> bool {
    !is_forking_move(board, mv) && best_moves.iter().any(|m| is_forking_move(board, *m))
}

/// A move allowed the opponent an unavoidable fork in reply.
pub fn hung_fork<B: BoardOracle>(
    board: &B,
    mv: Move,
    best_opponent_moves: &[Move],
    pv: Option<&[Move]>,
) -> bool {
    if best_opponent_moves.is_empty() {
        return false;
    }
    let after = board.push(mv);
    if !best_opponent_moves.iter().any(|m| is_forking_move(&after, *m)) {
        return false;
    }
    if let Some(pv) = pv {
        if pv.len() >= 2 {
            let after_reply = after.push(pv[0]);
            if is_forking_move(&after_reply, pv[1]) {
                trace!(?mv, "fork was unavoidable along principal variation");
                return false;
            }
        }
    }
    true
}

/// The player let themselves be mated in exactly `n` when they were not
/// forced to.
pub fn hung_mate_n(score: Score, best: Score, n: i32) -> bool {
    score == Score::mate(-n) && best > Score::mate(-n)
}

/// The player let themselves be mated in `n` or fewer moves when a
/// non-losing score was available.
pub fn hung_mate_n_plus(score: Score, best: Score, n: i32) -> bool {
    score.is_being_mated() && score >= Score::mate(-n) && !best.is_being_mated()
}

/// A forced mate in exactly `n` was available and missed.
pub fn missed_mate_n(score: Score, best: Score, n: i32) -> bool {
    best == Score::mate(n) && score < Score::mate(n)
}

/// A forced mate in `n` or fewer moves was available and missed.
pub fn missed_mate_n_plus(score: Score, best: Score, n: i32) -> bool {
    !score.is_mating() && best.is_mating() && best <= Score::mate(n)
}

/// The best continuation involved a sham sacrifice (a losing trade that
/// nonetheless leads to a good position) and the player didn't play it.
/// Real-sacrifice variants are not modeled; see module-level notes.
pub fn missed_sacrifice<B: BoardOracle>(board: &B, mv: Move, best_moves: &[Move]) -> bool {
    !best_moves.contains(&mv) && best_moves.iter().any(|m| started_bad_trade(board, *m, None))
}
