//! Error types: FEN/board validation, and the one recoverable runtime error
//! this crate defines ("no evaluation available").

use std::fmt;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    WrongFieldCount { found: usize },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount { found: usize },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength { rank_index: usize, length: usize },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar { character: char },
    /// The active color field is not "w" or "b".
    InvalidColor { found: String },
    /// The en passant field is not "-" or a valid algebraic square.
    InvalidEnPassant { found: String },
    /// A move counter (halfmove clock or fullmove number) is not a valid number.
    InvalidMoveCounter { field: &'static str, found: String },
    /// The parsed board fails structural validation.
    InvalidBoard { source: BoardError },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 6 FEN fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} squares, expected 8")
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square: \"{found}\"")
            }
            FenError::InvalidMoveCounter { field, found } => {
                write!(f, "invalid {field}: \"{found}\"")
            }
            FenError::InvalidBoard { source } => write!(f, "invalid board: {source}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(source: BoardError) -> Self {
        FenError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a parsed board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: &'static str, count: u32 },
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    #[error("overlapping piece bitboards")]
    OverlappingPieces,
}

/// Errors from converting an external evaluation payload into a [`crate::Score`].
///
/// Mate-score operations over a missing eval/mate payload surface as this
/// dedicated condition rather than panicking or silently defaulting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("no evaluation available")]
    NoEvaluation,
}
