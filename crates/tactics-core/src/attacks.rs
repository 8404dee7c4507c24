//! Attack generation for the six piece types.
//!
//! Unlike a magic-bitboard move generator built for perft-speed search,
//! this computes attack sets by direct ray-scanning on demand. Nothing here
//! needs to be fast enough for a full legal-move generator: the tactical
//! kernel only ever asks "what attacks this one square" for a handful of
//! squares per call, recursion depth bounded by the attacker count on a
//! single square, so there is no precomputed-table global state to
//! maintain.

use crate::bitboard::SquareSet;
use crate::color::Color;
use crate::square::Square;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Squares a knight on `sq` attacks.
pub fn knight_attacks(sq: Square) -> SquareSet {
    KNIGHT_DELTAS
        .iter()
        .filter_map(|&(df, dr)| sq.offset(df, dr))
        .collect()
}

/// Squares a king on `sq` attacks.
pub fn king_attacks(sq: Square) -> SquareSet {
    KING_DELTAS
        .iter()
        .filter_map(|&(df, dr)| sq.offset(df, dr))
        .collect()
}

/// Squares a pawn of `color` on `sq` attacks (diagonal captures only).
pub fn pawn_attacks(color: Color, sq: Square) -> SquareSet {
    let dr = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    [sq.offset(-1, dr), sq.offset(1, dr)]
        .into_iter()
        .flatten()
        .collect()
}

fn ray_attacks(sq: Square, occupied: SquareSet, dirs: &[(i8, i8)]) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    for &(df, dr) in dirs {
        let mut cur = sq;
        loop {
            match cur.offset(df, dr) {
                Some(next) => {
                    attacks = attacks.with(next);
                    if occupied.contains(next) {
                        break;
                    }
                    cur = next;
                }
                None => break,
            }
        }
    }
    attacks
}

/// Bishop attacks from `sq` given the board's `occupied` squares (blockers
/// stop the ray but are themselves included, so a blocker can be captured).
pub fn bishop_attacks(sq: Square, occupied: SquareSet) -> SquareSet {
    ray_attacks(sq, occupied, &BISHOP_DIRS)
}

/// Rook attacks from `sq` given `occupied`.
pub fn rook_attacks(sq: Square, occupied: SquareSet) -> SquareSet {
    ray_attacks(sq, occupied, &ROOK_DIRS)
}

/// Queen attacks from `sq` given `occupied`.
pub fn queen_attacks(sq: Square, occupied: SquareSet) -> SquareSet {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

/// Squares strictly between `a` and `b` on a shared rank, file, or diagonal.
/// Empty if they do not share one.
pub fn between(a: Square, b: Square) -> SquareSet {
    let (af, ar) = (a.file().index() as i8, a.rank().index() as i8);
    let (bf, br) = (b.file().index() as i8, b.rank().index() as i8);
    let (df, dr) = (bf - af, br - ar);

    let step = |d: i8| -> i8 {
        match d.cmp(&0) {
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
        }
    };

    let same_rank = df == 0 && dr != 0;
    let same_file = dr == 0 && df != 0;
    let same_diag = df != 0 && df.abs() == dr.abs();
    if !(same_rank || same_file || same_diag) {
        return SquareSet::EMPTY;
    }

    let (sf, sr) = (step(df), step(dr));
    let mut set = SquareSet::EMPTY;
    let mut cur = a;
    while let Some(next) = cur.offset(sf, sr) {
        if next == b {
            break;
        }
        set = set.with(next);
        cur = next;
    }
    set
}
