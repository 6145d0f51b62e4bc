use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_rules::pawn_forward;
use crate::game_state::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [Bitboard; 64] = generate_pawn_attacks(Color::White);
pub const BLACK_PAWN_ATTACKS: [Bitboard; 64] = generate_pawn_attacks(Color::Black);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

/// The two forward diagonals of every pawn in `pawns`. Pawns never attack
/// straight ahead.
#[inline]
pub const fn pawn_attack_targets(color: Color, pawns: Bitboard) -> Bitboard {
    let forward = pawn_forward(color, pawns);
    Bitboard(forward.left().0 | forward.right().0)
}

const fn generate_pawn_attacks(color: Color) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = pawn_attack_targets(color, Bitboard::from_square(sq as Square));
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, BLACK_PAWN_ATTACKS, WHITE_PAWN_ATTACKS};
    use crate::bitboard::bitboard::Bitboard;
    use crate::game_state::chess_types::Color;

    #[test]
    fn white_pawn_attacks_from_e2() {
        let e2 = 12u8;
        let expected = Bitboard::from_square(19) | Bitboard::from_square(21);
        assert_eq!(WHITE_PAWN_ATTACKS[e2 as usize], expected);
        assert_eq!(pawn_attacks(Color::White, e2), expected);
    }

    #[test]
    fn black_pawn_attacks_from_e7() {
        let e7 = 52u8;
        let expected = Bitboard::from_square(43) | Bitboard::from_square(45);
        assert_eq!(BLACK_PAWN_ATTACKS[e7 as usize], expected);
        assert_eq!(pawn_attacks(Color::Black, e7), expected);
    }

    #[test]
    fn edge_pawns_attack_one_square() {
        let a2 = 8u8;
        assert_eq!(pawn_attacks(Color::White, a2), Bitboard::from_square(17));
        let h7 = 55u8;
        assert_eq!(pawn_attacks(Color::Black, h7), Bitboard::from_square(46));
        assert!(pawn_attacks(Color::White, 60).is_empty());
    }
}
