//! FEN parsing. The tactical kernel itself never reads or writes FEN, but
//! the reference [`crate::Board`] needs it to load test positions.

use crate::bitboard::SquareSet;
use crate::board::Board;
use crate::color::Color;
use crate::error::{BoardError, FenError};
use crate::file::File;
use crate::piece::Piece;
use crate::piece_type::PieceType;
use crate::rank::Rank;
use crate::square::Square;

/// The standard starting position, in FEN.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a FEN string into a [`Board`].
///
/// Castling rights and move counters are accepted (for field-count
/// validation) but not retained: the tactical kernel never consults them.
pub fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount { found: fields.len() });
    }
    let [placement, color_field, _castling, ep_field, _halfmove, _fullmove] = [
        fields[0], fields[1], fields[2], fields[3], fields[4], fields[5],
    ];

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut pieces = [SquareSet::EMPTY; 6];
    let mut sides = [SquareSet::EMPTY; 2];

    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let rank_index = 7 - rank_from_top;
        let mut file_index: usize = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file_index += skip as usize;
                continue;
            }
            if file_index >= 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index + 1,
                });
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let square = Square::new(
                Rank::from_index(rank_index as u8).unwrap(),
                File::from_index(file_index as u8).unwrap(),
            );
            pieces[piece.kind as usize] = pieces[piece.kind as usize].with(square);
            sides[piece.color.index()] = sides[piece.color.index()].with(square);
            file_index += 1;
        }
        if file_index != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file_index,
            });
        }
    }

    let side_to_move = match color_field {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            })
        }
    };

    let en_passant = match ep_field {
        "-" => None,
        s => Some(Square::from_algebraic(s).ok_or_else(|| FenError::InvalidEnPassant {
            found: s.to_string(),
        })?),
    };

    validate(&pieces, &sides)?;

    Ok(Board::from_raw(pieces, sides, side_to_move, en_passant))
}

fn validate(pieces: &[SquareSet; 6], sides: &[SquareSet; 2]) -> Result<(), BoardError> {
    if (sides[0] & sides[1]).count() != 0 {
        return Err(BoardError::OverlappingPieces);
    }
    for color in Color::ALL {
        let king_count = (pieces[PieceType::King as usize] & sides[color.index()]).count();
        if king_count != 1 {
            return Err(BoardError::InvalidKingCount {
                color: if color == Color::White { "white" } else { "black" },
                count: king_count,
            });
        }
    }
    let back_ranks = SquareSet::new(0xFF00_0000_0000_00FF);
    if (pieces[PieceType::Pawn as usize] & back_ranks).count() != 0 {
        return Err(BoardError::PawnsOnBackRank);
    }
    Ok(())
}

impl std::str::FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Board, FenError> {
        parse_fen(s)
    }
}
