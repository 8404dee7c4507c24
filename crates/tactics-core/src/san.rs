//! Minimal SAN rendering/parsing against [`Board`], used only by tests and
//! by move-list conversion helpers. Disambiguation only considers
//! pseudo-attackers (no check legality),
//! which is sufficient for the unambiguous moves test fixtures use; a
//! production engine's oracle would supply a fuller implementation.

use crate::board::{Board, BoardOracle};
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_type::PieceType;
use crate::square::Square;

/// Render `mv` as a SAN string. Does not append check/mate suffixes, since
/// that needs full legal-move generation, out of scope for this crate.
pub fn render_san(board: &Board, mv: Move) -> String {
    let piece_kind = board.piece_type_at(mv.from()).unwrap_or(PieceType::Pawn);
    let capture = board.is_capture(mv);
    let dest = mv.to().to_string();
    let mut s = String::new();

    if piece_kind == PieceType::Pawn {
        if capture {
            s.push(mv.from().file().to_char());
            s.push('x');
        }
        s.push_str(&dest);
        if let Some(p) = mv.promotion() {
            s.push('=');
            s.push(p.uci_char().to_ascii_uppercase());
        }
        return s;
    }

    s.push(piece_kind.fen_char().to_ascii_uppercase());

    let color = board.color_at(mv.from()).unwrap_or_else(|| board.side_to_move());
    let others = (board.attackers(color, mv.to()) & board.pieces_of(piece_kind) & board.occupied_co(color))
        .without(mv.from());
    if !others.is_empty() {
        let same_file = others.iter().any(|sq| sq.file() == mv.from().file());
        let same_rank = others.iter().any(|sq| sq.rank() == mv.from().rank());
        if !same_file {
            s.push(mv.from().file().to_char());
        } else if !same_rank {
            s.push(mv.from().rank().to_char());
        } else {
            s.push_str(&mv.from().to_string());
        }
    }

    if capture {
        s.push('x');
    }
    s.push_str(&dest);
    s
}

/// Parse a SAN string in the context of `board`. Returns `None` for
/// castling notation and for anything that doesn't resolve to exactly one
/// pseudo-attacker of the matching piece type.
pub fn parse_san(board: &Board, san: &str) -> Option<Move> {
    let trimmed = san.trim_end_matches(['+', '#', '!', '?']);
    if trimmed.starts_with('O') {
        return None;
    }

    let (body, promotion) = match trimmed.find('=') {
        Some(eq_pos) => (
            &trimmed[..eq_pos],
            crate::chess_move::PromotionPiece::from_uci_char(
                trimmed[eq_pos + 1..].chars().next()?.to_ascii_lowercase(),
            ),
        ),
        None => (trimmed, None),
    };

    let mut chars = body.chars();
    let first = chars.next()?;
    let (piece_kind, rest) = match first {
        'N' => (PieceType::Knight, &body[1..]),
        'B' => (PieceType::Bishop, &body[1..]),
        'R' => (PieceType::Rook, &body[1..]),
        'Q' => (PieceType::Queen, &body[1..]),
        'K' => (PieceType::King, &body[1..]),
        _ => (PieceType::Pawn, body),
    };
    if rest.len() < 2 {
        return None;
    }
    let dest = Square::from_algebraic(&rest[rest.len() - 2..])?;
    let disambig: String = rest[..rest.len() - 2].chars().filter(|&c| c != 'x').collect();

    let color = board.side_to_move();
    let from = if piece_kind == PieceType::Pawn {
        find_pawn_source(board, color, dest, &disambig)?
    } else {
        let candidates =
            board.attackers(color, dest) & board.pieces_of(piece_kind) & board.occupied_co(color);
        let matches: Vec<Square> = candidates
            .iter()
            .filter(|sq| matches_disambiguation(*sq, &disambig))
            .collect();
        if matches.len() == 1 {
            matches[0]
        } else {
            return None;
        }
    };

    Some(match promotion {
        Some(p) => Move::new_promotion(from, dest, p),
        None => Move::new(from, dest),
    })
}

fn matches_disambiguation(sq: Square, disambig: &str) -> bool {
    disambig.chars().all(|d| {
        if d.is_ascii_alphabetic() {
            sq.file().to_char() == d
        } else {
            sq.rank().to_char() == d
        }
    })
}

fn find_pawn_source(board: &Board, color: Color, dest: Square, disambig: &str) -> Option<Square> {
    let forward: i8 = match color {
        Color::White => -1,
        Color::Black => 1,
    };
    if disambig.is_empty() {
        let one = dest.offset(0, forward)?;
        if board.piece_type_at(one) == Some(PieceType::Pawn) && board.color_at(one) == Some(color) {
            return Some(one);
        }
        let two = one.offset(0, forward)?;
        if board.piece_type_at(one).is_none()
            && board.piece_type_at(two) == Some(PieceType::Pawn)
            && board.color_at(two) == Some(color)
        {
            return Some(two);
        }
        None
    } else {
        let file_char = disambig.chars().next()?;
        let candidates =
            board.attackers(color, dest) & board.pieces_of(PieceType::Pawn) & board.occupied_co(color);
        candidates.iter().find(|sq| sq.file().to_char() == file_char)
    }
}
