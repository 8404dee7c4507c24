//! Chess piece types and the piece value table underlying material scoring.

use std::fmt;

/// The kind of a chess piece, or [`PieceType::Empty`] for an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
    Empty = 6,
}

impl PieceType {
    /// Material value in whole-pawn units. The king's value is a large
    /// sentinel used only as a least-valuable-attacker
    /// tiebreak; it never actually changes hands in a legal exchange.
    pub const fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight => 3,
            PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 1000,
            PieceType::Empty => 0,
        }
    }

    /// All real (non-`Empty`) piece kinds, lowest value first — the order
    /// "least valuable attacker" search should walk.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
            PieceType::Empty => '.',
        }
    }

    #[inline]
    pub fn from_fen_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/// Return the material value of whatever occupies `piece_type` — total over
/// every `PieceType` including `Empty`: an empty square is worth 0, never a
/// missing value.
#[inline]
pub const fn piece_value(piece_type: Option<PieceType>) -> i32 {
    match piece_type {
        Some(pt) => pt.value(),
        None => 0,
    }
}
