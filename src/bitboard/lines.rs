//! Straight-line relations between two squares.
//!
//! Every square gets a rank, file, diagonal and anti-diagonal id at compile
//! time, so "are these on one line" is a couple of byte compares.

use crate::bitboard::bitboard::Bitboard;
use crate::bitboard::direction::Direction;
use crate::bitboard::sliding::RAYS;
use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineIds {
    pub rank: u8,
    pub file: u8,
    /// Constant along a1-h8 diagonals.
    pub diagonal: u8,
    /// Constant along h1-a8 diagonals.
    pub anti_diagonal: u8,
}

pub const LINE_IDS: [LineIds; 64] = generate_line_ids();

const fn generate_line_ids() -> [LineIds; 64] {
    let mut table = [LineIds {
        rank: 0,
        file: 0,
        diagonal: 0,
        anti_diagonal: 0,
    }; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as u8;
        let rank = (sq / 8) as u8;
        table[sq] = LineIds {
            rank,
            file,
            diagonal: file + 7 - rank,
            anti_diagonal: file + rank,
        };
        sq += 1;
    }

    table
}

#[inline]
pub fn same_rank(a: Square, b: Square) -> bool {
    LINE_IDS[a as usize].rank == LINE_IDS[b as usize].rank
}

#[inline]
pub fn same_file(a: Square, b: Square) -> bool {
    LINE_IDS[a as usize].file == LINE_IDS[b as usize].file
}

#[inline]
pub fn same_diagonal(a: Square, b: Square) -> bool {
    LINE_IDS[a as usize].diagonal == LINE_IDS[b as usize].diagonal
}

#[inline]
pub fn same_anti_diagonal(a: Square, b: Square) -> bool {
    LINE_IDS[a as usize].anti_diagonal == LINE_IDS[b as usize].anti_diagonal
}

/// Distinct squares sharing a rank, file or diagonal.
#[inline]
pub fn same_line(a: Square, b: Square) -> bool {
    a != b && (same_rank(a, b) || same_file(a, b) || same_diagonal(a, b) || same_anti_diagonal(a, b))
}

/// Direction to walk from `from` to reach `to` in a straight line.
pub fn direction_between(from: Square, to: Square) -> Option<Direction> {
    if !same_line(from, to) {
        return None;
    }
    Direction::ALL
        .into_iter()
        .find(|direction| RAYS[direction.index()][from as usize].contains(to))
}

/// Squares strictly between `a` and `b`; empty when they are not on a line
/// or are adjacent.
pub fn squares_between(a: Square, b: Square) -> Bitboard {
    match direction_between(a, b) {
        Some(direction) => {
            RAYS[direction.index()][a as usize] & RAYS[direction.opposite().index()][b as usize]
        }
        None => Bitboard::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A1: Square = 0;
    const B1: Square = 1;
    const D1: Square = 3;
    const E1: Square = 4;
    const H1: Square = 7;
    const C3: Square = 18;
    const D4: Square = 27;
    const A8: Square = 56;
    const H8: Square = 63;

    #[test]
    fn line_membership() {
        assert!(same_rank(A1, H1));
        assert!(same_file(A1, A8));
        assert!(same_diagonal(A1, H8));
        assert!(same_anti_diagonal(H1, A8));
        assert!(same_line(C3, D4));
        assert!(!same_line(A1, C3 + 1));
        assert!(!same_line(D4, D4));
    }

    #[test]
    fn between_on_rank_and_diagonal() {
        assert_eq!(
            squares_between(E1, H1),
            Bitboard::from_square(5) | Bitboard::from_square(6)
        );
        assert_eq!(
            squares_between(A1, E1),
            Bitboard::from_square(B1) | Bitboard::from_square(2) | Bitboard::from_square(D1)
        );
        assert_eq!(
            squares_between(H8, A1),
            squares_between(A1, H8)
        );
        assert_eq!(squares_between(A1, H8).count(), 6);
        assert!(squares_between(A1, H8).contains(D4));
    }

    #[test]
    fn between_is_empty_for_unaligned_or_adjacent() {
        assert!(squares_between(A1, C3 + 1).is_empty());
        assert!(squares_between(A1, B1).is_empty());
        assert_eq!(direction_between(A1, B1), Some(Direction::Right));
        assert_eq!(direction_between(H8, A1), Some(Direction::DownLeft));
    }
}
