//! Pure helpers that sit above the tactical kernel: a running-total
//! reduction used for cumulative score/material graphs, and move-list
//! notation conversion built on the board oracle's SAN support.

use tactics_core::{parse_san, render_san, Board, BoardOracle, Move};

/// The running (cumulative) sum of `values`.
///
/// ```
/// # use tactics_heuristics::running_total;
/// assert_eq!(running_total(&[1, -2, 3, 4]), vec![1, -1, 2, 6]);
/// assert_eq!(running_total(&[]), Vec::<i32>::new());
/// ```
pub fn running_total(values: &[i32]) -> Vec<i32> {
    let mut accum = 0;
    values
        .iter()
        .map(|&x| {
            accum += x;
            accum
        })
        .collect()
}

/// Convert a list of SAN strings played from `board` into `Move`s, applying
/// each one before parsing the next (so later SANs can be disambiguated
/// against the resulting position).
pub fn san_list_to_moves(board: &Board, sans: &[&str]) -> Option<Vec<Move>> {
    let mut position = board.clone();
    let mut moves = Vec::with_capacity(sans.len());
    for san in sans {
        let mv = parse_san(&position, san)?;
        position = position.push(mv);
        moves.push(mv);
    }
    Some(moves)
}

/// Convert a list of `Move`s played from `board` into SAN strings.
pub fn moves_to_san_list(board: &Board, moves: &[Move]) -> Vec<String> {
    let mut position = board.clone();
    let mut sans = Vec::with_capacity(moves.len());
    for &mv in moves {
        sans.push(render_san(&position, mv));
        position = position.push(mv);
    }
    sans
}
