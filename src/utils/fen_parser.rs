//! FEN-to-Game parser.
//!
//! Accepts the four placement/side/castling/en-passant fields, optionally
//! followed by the two clocks (`0 1` when absent). Every malformed field is
//! reported as a `FenError`; nothing here panics on bad text.

use thiserror::Error;

use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_types::*;
use crate::game_state::game::{create_game_from_position, Game};
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;

/// Why a FEN string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN is missing the {0} field")]
    MissingField(&'static str),

    #[error("FEN has {0} fields; expected 4 or 6")]
    FieldCount(usize),

    #[error("board layout has {0} ranks; expected 8")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: u8 },

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPiece(char),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights field: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en-passant square: {0}")]
    InvalidEnPassant(String),

    #[error("invalid {field}: {value}")]
    InvalidClock { field: &'static str, value: String },
}

pub fn parse_fen(fen: &str) -> Result<Game, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    match fields.len() {
        4 | 6 => {}
        0 => return Err(FenError::MissingField("board layout")),
        1 => return Err(FenError::MissingField("side-to-move")),
        2 => return Err(FenError::MissingField("castling rights")),
        3 => return Err(FenError::MissingField("en-passant")),
        count => return Err(FenError::FieldCount(count)),
    }

    let position = parse_board(fields[0])?;
    let side_to_move = parse_side_to_move(fields[1])?;
    let castling_rights = parse_castling_rights(fields[2])?;
    let en_passant_target = parse_en_passant_target(fields[3])?;
    let (halfmove_clock, fullmove_number) = match fields.get(4..6) {
        Some(&[halfmove, fullmove]) => (
            parse_clock("halfmove clock", halfmove)?,
            parse_clock("fullmove number", fullmove)?,
        ),
        _ => (0, 1),
    };

    Ok(create_game_from_position(
        position,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    ))
}

fn parse_board(board_part: &str) -> Result<Position, FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut position = Position::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let width_error = FenError::RankWidth { rank: board_rank + 1 };
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidPiece(ch));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(width_error);
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
            if file >= 8 {
                return Err(width_error);
            }
            position.put(piece, board_rank * 8 + file);
            file += 1;
        }

        if file != 8 {
            return Err(width_error);
        }
    }

    Ok(position)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(CASTLE_NONE);
    }

    let mut rights = CASTLE_NONE;
    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(FenError::InvalidCastlingRights(castling_part.to_owned())),
        };
    }

    Ok(rights)
}

/// Only third- and sixth-rank squares can follow a double push.
fn parse_en_passant_target(en_passant_part: &str) -> Result<Bitboard, FenError> {
    if en_passant_part == "-" {
        return Ok(Bitboard::EMPTY);
    }

    match algebraic_to_square(en_passant_part) {
        Some(square) if matches!(square / 8, 2 | 5) => Ok(Bitboard::from_square(square)),
        _ => Err(FenError::InvalidEnPassant(en_passant_part.to_owned())),
    }
}

fn parse_clock(field: &'static str, value: &str) -> Result<u16, FenError> {
    value.parse::<u16>().map_err(|_| FenError::InvalidClock {
        field,
        value: value.to_owned(),
    })
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    let kind = PieceKind::ALL
        .into_iter()
        .find(|kind| kind.letter() == ch.to_ascii_lowercase())?;

    Some(Piece::new(color, kind))
}
