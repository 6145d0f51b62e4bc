//! Board constants of standard chess: the starting layout, promotion and
//! pawn start ranks, and the fixed king/rook squares of each castling move.

use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const A1: Square = 0;
pub const C1: Square = 2;
pub const D1: Square = 3;
pub const E1: Square = 4;
pub const F1: Square = 5;
pub const G1: Square = 6;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const C8: Square = 58;
pub const D8: Square = 59;
pub const E8: Square = 60;
pub const F8: Square = 61;
pub const G8: Square = 62;
pub const H8: Square = 63;

/// Rank a pawn of `color` promotes on.
#[inline]
pub const fn promotion_rank(color: Color) -> Bitboard {
    match color {
        Color::White => Bitboard::RANK_8,
        Color::Black => Bitboard::RANK_1,
    }
}

/// Rank a pawn of `color` starts on (and may double-push from).
#[inline]
pub const fn pawn_start_rank(color: Color) -> Bitboard {
    match color {
        Color::White => Bitboard::RANK_2,
        Color::Black => Bitboard::RANK_7,
    }
}

/// One square toward the opponent's side.
#[inline]
pub const fn pawn_forward(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::White => pawns.up(),
        Color::Black => pawns.down(),
    }
}

/// One square back toward `color`'s own side.
#[inline]
pub const fn pawn_backward(color: Color, pawns: Bitboard) -> Bitboard {
    pawn_forward(color.opposite(), pawns)
}

/// Fixed squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRoute {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

#[inline]
pub const fn castling_route(color: Color, side: CastlingSide) -> CastlingRoute {
    let right = castling_right(color, side);
    match (color, side) {
        (Color::White, CastlingSide::Kingside) => CastlingRoute {
            right,
            king_from: E1,
            king_to: G1,
            rook_from: H1,
            rook_to: F1,
        },
        (Color::White, CastlingSide::Queenside) => CastlingRoute {
            right,
            king_from: E1,
            king_to: C1,
            rook_from: A1,
            rook_to: D1,
        },
        (Color::Black, CastlingSide::Kingside) => CastlingRoute {
            right,
            king_from: E8,
            king_to: G8,
            rook_from: H8,
            rook_to: F8,
        },
        (Color::Black, CastlingSide::Queenside) => CastlingRoute {
            right,
            king_from: E8,
            king_to: C8,
            rook_from: A8,
            rook_to: D8,
        },
    }
}

/// `CASTLING_RIGHTS_KEPT[square]`: rights that survive a move touching
/// `square`, either leaving it or landing on it.
pub const CASTLING_RIGHTS_KEPT: [CastlingRights; 64] = generate_rights_kept();

const fn generate_rights_kept() -> [CastlingRights; 64] {
    let mut table = [CASTLE_ALL; 64];
    table[E1 as usize] = CASTLE_ALL & !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
    table[H1 as usize] = CASTLE_ALL & !CASTLE_WHITE_KINGSIDE;
    table[A1 as usize] = CASTLE_ALL & !CASTLE_WHITE_QUEENSIDE;
    table[E8 as usize] = CASTLE_ALL & !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
    table[H8 as usize] = CASTLE_ALL & !CASTLE_BLACK_KINGSIDE;
    table[A8 as usize] = CASTLE_ALL & !CASTLE_BLACK_QUEENSIDE;
    table
}
