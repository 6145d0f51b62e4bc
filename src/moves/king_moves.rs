//! King step tables.
//!
//! Adjacent-square masks built from the one-square shifts. Used for the
//! king's own moves and for keeping the two kings apart.

use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_types::Square;

pub const KING_ATTACKS: [Bitboard; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}

/// The up-to-eight squares around every king in `kings`.
#[inline]
pub const fn king_targets(kings: Bitboard) -> Bitboard {
    let sideways = Bitboard(kings.left().0 | kings.right().0);
    let row = Bitboard(sideways.0 | kings.0);
    Bitboard(sideways.0 | row.up().0 | row.down().0)
}

const fn generate_king_attacks() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = king_targets(Bitboard::from_square(sq as Square));
        sq += 1;
    }

    table
}
