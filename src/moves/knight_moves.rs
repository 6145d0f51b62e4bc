use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_types::Square;

pub const KNIGHT_ATTACKS: [Bitboard; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

/// Knight targets of every knight in `knights` at once: two steps along one
/// axis, then one step across.
#[inline]
pub const fn knight_targets(knights: Bitboard) -> Bitboard {
    let up2 = knights.up().up();
    let down2 = knights.down().down();
    let left2 = knights.left().left();
    let right2 = knights.right().right();

    Bitboard(
        up2.left().0
            | up2.right().0
            | down2.left().0
            | down2.right().0
            | left2.up().0
            | left2.down().0
            | right2.up().0
            | right2.down().0,
    )
}

const fn generate_knight_attacks() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = knight_targets(Bitboard::from_square(sq as Square));
        sq += 1;
    }

    table
}
