//! The `BoardOracle` trait and a concrete `Board` implementing it, so the
//! tactical kernel can be exercised against real positions without a
//! production chess engine plugged in.
//!
//! `Board` intentionally does NOT generate fully legal moves (no castling
//! legality, no stalemate/checkmate detection, no promotion move lists):
//! move generation and legality checking are out of scope here, and the
//! tactical kernel only ever needs pseudo-attacks, pins, and king location
//! from its oracle.

use crate::attacks::{bishop_attacks, between, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::SquareSet;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_type::PieceType;
use crate::square::Square;

/// The capabilities the tactical kernel needs from a chess position.
/// A production engine implements this trait directly over
/// its own board representation; this crate's `Board` is a reference
/// implementation used for testing.
pub trait BoardOracle: Clone {
    /// The side to move on this position.
    fn side_to_move(&self) -> Color;

    /// The king square of `color`, if present.
    fn king(&self, color: Color) -> Option<Square>;

    /// Pseudo-legal attackers of `square` belonging to `color` — pieces
    /// whose movement rules reach `square`, ignoring pins and check.
    fn attackers(&self, color: Color, square: Square) -> SquareSet;

    /// Same as [`attackers`](Self::attackers), for callers that think in
    /// terms of a bitmap accessor rather than a `SquareSet` accessor; the
    /// two coincide here since `SquareSet` already is the bitmap.
    fn attackers_mask(&self, color: Color, square: Square) -> SquareSet {
        self.attackers(color, square)
    }

    /// Squares the piece on `square` attacks (empty if `square` is empty).
    fn attacks_mask(&self, square: Square) -> SquareSet;

    /// All squares occupied by `color`.
    fn occupied_co(&self, color: Color) -> SquareSet;

    fn piece_type_at(&self, square: Square) -> Option<PieceType>;

    fn color_at(&self, square: Square) -> Option<Color>;

    /// Squares along the ray of an absolute pin on the `color` piece at
    /// `square`: the pinner's square plus everything between it and the
    /// king. Returns [`SquareSet::ALL`] if the piece is not pinned.
    fn pin(&self, color: Color, square: Square) -> SquareSet;

    fn is_capture(&self, mv: Move) -> bool;

    fn is_en_passant(&self, mv: Move) -> bool;

    /// Apply `mv`, returning a new position. Never mutates `self`.
    fn push(&self, mv: Move) -> Self;
}

/// A complete chess position: piece placement, side to move, en passant
/// target. No castling rights are tracked — the tactical kernel never
/// needs them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    pieces: [SquareSet; PieceType::ALL.len()],
    sides: [SquareSet; Color::COUNT],
    side_to_move: Color,
    en_passant: Option<Square>,
}

impl Board {
    pub fn empty(side_to_move: Color) -> Board {
        Board {
            pieces: [SquareSet::EMPTY; 6],
            sides: [SquareSet::EMPTY; 2],
            side_to_move,
            en_passant: None,
        }
    }

    pub(crate) fn from_raw(
        pieces: [SquareSet; 6],
        sides: [SquareSet; 2],
        side_to_move: Color,
        en_passant: Option<Square>,
    ) -> Board {
        Board {
            pieces,
            sides,
            side_to_move,
            en_passant,
        }
    }

    #[inline]
    pub fn occupied(&self) -> SquareSet {
        self.sides[0] | self.sides[1]
    }

    #[inline]
    pub fn pieces_of(&self, kind: PieceType) -> SquareSet {
        self.pieces[kind as usize]
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Place `piece` of `color` on `square`, removing whatever was there.
    pub fn set_piece(&mut self, square: Square, kind: PieceType, color: Color) {
        self.remove_piece(square);
        self.pieces[kind as usize] = self.pieces[kind as usize].with(square);
        self.sides[color.index()] = self.sides[color.index()].with(square);
    }

    fn remove_piece(&mut self, square: Square) {
        for kind in PieceType::ALL {
            self.pieces[kind as usize] = self.pieces[kind as usize].without(square);
        }
        self.sides[0] = self.sides[0].without(square);
        self.sides[1] = self.sides[1].without(square);
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    fn pseudo_attackers_of(&self, color: Color, square: Square) -> SquareSet {
        let occ = self.occupied();
        let side = self.sides[color.index()];

        let knights = knight_attacks(square) & self.pieces_of(PieceType::Knight) & side;
        let kings = king_attacks(square) & self.pieces_of(PieceType::King) & side;
        let rook_like =
            rook_attacks(square, occ) & (self.pieces_of(PieceType::Rook) | self.pieces_of(PieceType::Queen)) & side;
        let bishop_like = bishop_attacks(square, occ)
            & (self.pieces_of(PieceType::Bishop) | self.pieces_of(PieceType::Queen))
            & side;
        // A pawn attacks diagonally forward; so a `color` pawn attacks `square`
        // iff `square` is a diagonal-forward target from the pawn, i.e. the
        // pawn sits where `pawn_attacks(color, pawn_square)` reaches `square` —
        // equivalently, where `pawn_attacks(!color, square)` reaches the pawn.
        let pawns = pawn_attacks(!color, square) & self.pieces_of(PieceType::Pawn) & side;

        knights | kings | rook_like | bishop_like | pawns
    }

    /// Enemy pieces attacking `color`'s king, or empty if `color` has no king.
    pub fn checkers(&self, color: Color) -> SquareSet {
        match self.king(color) {
            Some(king_sq) => self.pseudo_attackers_of(!color, king_sq),
            None => SquareSet::EMPTY,
        }
    }

    fn compute_pin(&self, color: Color, square: Square) -> SquareSet {
        let Some(king_sq) = self.king(color) else {
            return SquareSet::ALL;
        };
        if king_sq == square {
            return SquareSet::ALL;
        }
        let occ = self.occupied();
        let enemy = self.sides[(!color).index()];

        let diag_sliders = enemy & (self.pieces_of(PieceType::Bishop) | self.pieces_of(PieceType::Queen));
        let orth_sliders = enemy & (self.pieces_of(PieceType::Rook) | self.pieces_of(PieceType::Queen));

        for (slider_bb, ray_from_king) in [
            (diag_sliders, bishop_attacks(king_sq, SquareSet::EMPTY)),
            (orth_sliders, rook_attacks(king_sq, SquareSet::EMPTY)),
        ] {
            for attacker in (ray_from_king & slider_bb).iter() {
                let between_bb = between(king_sq, attacker);
                let blockers = between_bb & occ;
                if blockers.count() == 1 && blockers.contains(square) {
                    return between_bb.with(attacker);
                }
            }
        }
        SquareSet::ALL
    }
}

impl BoardOracle for Board {
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn king(&self, color: Color) -> Option<Square> {
        (self.pieces_of(PieceType::King) & self.sides[color.index()]).lsb()
    }

    fn attackers(&self, color: Color, square: Square) -> SquareSet {
        self.pseudo_attackers_of(color, square)
    }

    fn attacks_mask(&self, square: Square) -> SquareSet {
        let Some(color) = self.color_at(square) else {
            return SquareSet::EMPTY;
        };
        let occ = self.occupied();
        match self.piece_type_at(square) {
            Some(PieceType::Pawn) => pawn_attacks(color, square),
            Some(PieceType::Knight) => knight_attacks(square),
            Some(PieceType::Bishop) => bishop_attacks(square, occ),
            Some(PieceType::Rook) => rook_attacks(square, occ),
            Some(PieceType::Queen) => bishop_attacks(square, occ) | rook_attacks(square, occ),
            Some(PieceType::King) => king_attacks(square),
            _ => SquareSet::EMPTY,
        }
    }

    fn occupied_co(&self, color: Color) -> SquareSet {
        self.sides[color.index()]
    }

    fn piece_type_at(&self, square: Square) -> Option<PieceType> {
        PieceType::ALL.into_iter().find(|&kind| self.pieces_of(kind).contains(square))
    }

    fn color_at(&self, square: Square) -> Option<Color> {
        if self.sides[0].contains(square) {
            Some(Color::White)
        } else if self.sides[1].contains(square) {
            Some(Color::Black)
        } else {
            None
        }
    }

    fn pin(&self, color: Color, square: Square) -> SquareSet {
        self.compute_pin(color, square)
    }

    fn is_en_passant(&self, mv: Move) -> bool {
        self.piece_type_at(mv.from()) == Some(PieceType::Pawn)
            && self.en_passant == Some(mv.to())
            && mv.from().file() != mv.to().file()
            && self.piece_type_at(mv.to()).is_none()
    }

    fn is_capture(&self, mv: Move) -> bool {
        self.piece_type_at(mv.to()).is_some() || self.is_en_passant(mv)
    }

    fn push(&self, mv: Move) -> Board {
        let mut next = *self;
        let mover_color = self.color_at(mv.from());
        let mover_kind = self.piece_type_at(mv.from());

        if self.is_en_passant(mv) {
            let captured_rank_step: i8 = match self.side_to_move {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(captured_sq) = mv.to().offset(0, captured_rank_step) {
                next.remove_piece(captured_sq);
            }
        }

        next.remove_piece(mv.from());
        next.remove_piece(mv.to());

        if let (Some(kind), Some(color)) = (mover_kind, mover_color) {
            let placed_kind = match mv.promotion() {
                Some(promo) => promo.to_piece_type(),
                None => kind,
            };
            next.set_piece(mv.to(), placed_kind, color);
        }

        next.en_passant = None;
        if mover_kind == Some(PieceType::Pawn) {
            let rank_delta = (mv.to().rank().index() as i8) - (mv.from().rank().index() as i8);
            if rank_delta.abs() == 2 {
                let step = rank_delta.signum();
                next.en_passant = mv.from().offset(0, step);
            }
        }

        next.side_to_move = !self.side_to_move;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::parse_fen;

    #[test]
    fn king_location() {
        let board = parse_fen("1k6/8/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
        assert_eq!(board.king(Color::White).unwrap().to_string(), "b1");
        assert_eq!(board.king(Color::Black).unwrap().to_string(), "b8");
    }

    #[test]
    fn pawn_attackers_of_e5() {
        let board = parse_fen("1k6/8/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
        let attackers = board.attackers(Color::White, Square::from_algebraic("e5").unwrap());
        assert!(attackers.contains(Square::from_algebraic("c3").unwrap()));
    }

    #[test]
    fn pin_ray_when_pinned() {
        // White bishop on c3 pinned to king b1 by a rook on e5... construct a
        // simpler pin: rook on a8 pins rook on a4 to king a1.
        let board = parse_fen("r7/8/8/8/R7/8/8/K7 w - - 0 1").unwrap();
        let ray = board.pin(Color::White, Square::from_algebraic("a4").unwrap());
        assert_ne!(ray, SquareSet::ALL);
        assert!(ray.contains(Square::from_algebraic("a8").unwrap()));
    }

    #[test]
    fn pin_all_squares_when_not_pinned() {
        let board = parse_fen("1k6/8/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
        let ray = board.pin(Color::White, Square::from_algebraic("c3").unwrap());
        assert_eq!(ray, SquareSet::ALL);
    }

    #[test]
    fn push_capture_removes_victim() {
        let board = parse_fen("1k6/8/8/4p3/8/2B5/8/1K6 w - - 0 1").unwrap();
        let mv = Move::new(Square::from_algebraic("c3").unwrap(), Square::from_algebraic("e5").unwrap());
        let after = board.push(mv);
        assert_eq!(after.piece_type_at(Square::from_algebraic("e5").unwrap()), Some(PieceType::Bishop));
        assert_eq!(after.color_at(Square::from_algebraic("e5").unwrap()), Some(Color::White));
    }

    #[test]
    fn push_en_passant_removes_captured_pawn() {
        let board = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let mv = Move::new(Square::from_algebraic("e5").unwrap(), Square::from_algebraic("d6").unwrap());
        assert!(board.is_en_passant(mv));
        let after = board.push(mv);
        assert_eq!(after.piece_type_at(Square::from_algebraic("d5").unwrap()), None);
        assert_eq!(after.piece_type_at(Square::from_algebraic("d6").unwrap()), Some(PieceType::Pawn));
    }

    #[test]
    fn push_sets_en_passant_on_double_step() {
        let board = parse_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let mv = Move::new(Square::from_algebraic("e2").unwrap(), Square::from_algebraic("e4").unwrap());
        let after = board.push(mv);
        assert_eq!(after.en_passant(), Some(Square::from_algebraic("e3").unwrap()));
    }
}
