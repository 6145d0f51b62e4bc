//! 64-square bitset used for every board mask in the crate.
//!
//! Bit `rank * 8 + file` is set for an occupied square, so bit 0 is `a1`
//! and bit 63 is `h8`. The four one-square shifts are the primitive every
//! piece pattern and sliding fill is composed from; they drop any bit that
//! would wrap across a file edge or fall off rank 1 / rank 8.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::bitboard::direction::Direction;
use crate::game_state::chess_types::Square;

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(!0);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_2: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_7: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    /// Squares of the same colour as `b1`.
    pub const LIGHT_SQUARES: Bitboard = Bitboard(0x55AA_55AA_55AA_55AA);

    #[inline]
    pub const fn from_square(square: Square) -> Self {
        Bitboard(1u64 << square)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1u64 << square) != 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    /// Index of the lowest set square.
    #[inline]
    pub const fn first_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as Square)
        }
    }

    /// Index of the highest set square.
    #[inline]
    pub const fn last_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(63 - self.0.leading_zeros() as Square)
        }
    }

    /// The square of a one-bit mask. Panics if the mask is empty or has
    /// more than one bit.
    #[inline]
    pub fn single_square(self) -> Square {
        assert!(
            self.0.count_ones() == 1,
            "expected a single-square mask, got {:#018x}",
            self.0
        );
        self.0.trailing_zeros() as Square
    }

    /// Toward rank 8.
    #[inline]
    pub const fn up(self) -> Bitboard {
        Bitboard(self.0 << 8)
    }

    /// Toward rank 1.
    #[inline]
    pub const fn down(self) -> Bitboard {
        Bitboard(self.0 >> 8)
    }

    /// Toward the a-file.
    #[inline]
    pub const fn left(self) -> Bitboard {
        Bitboard((self.0 & !Self::FILE_A.0) >> 1)
    }

    /// Toward the h-file.
    #[inline]
    pub const fn right(self) -> Bitboard {
        Bitboard((self.0 & !Self::FILE_H.0) << 1)
    }

    #[inline]
    pub const fn shift(self, direction: Direction) -> Bitboard {
        match direction {
            Direction::Up => self.up(),
            Direction::Down => self.down(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
            Direction::UpLeft => self.up().left(),
            Direction::UpRight => self.up().right(),
            Direction::DownLeft => self.down().left(),
            Direction::DownRight => self.down().right(),
        }
    }

    #[inline]
    pub const fn union(self, other: Bitboard) -> Bitboard {
        Bitboard(self.0 | other.0)
    }

    /// Union of any number of masks; empty input gives `EMPTY`.
    pub fn union_all<I: IntoIterator<Item = Bitboard>>(boards: I) -> Bitboard {
        boards.into_iter().fold(Self::EMPTY, |acc, bb| acc | bb)
    }

    /// Intersection of any number of masks; empty input gives `FULL`.
    pub fn intersection_all<I: IntoIterator<Item = Bitboard>>(boards: I) -> Bitboard {
        boards.into_iter().fold(Self::FULL, |acc, bb| acc & bb)
    }

    pub fn xor_all<I: IntoIterator<Item = Bitboard>>(boards: I) -> Bitboard {
        boards.into_iter().fold(Self::EMPTY, |acc, bb| acc ^ bb)
    }

    /// One single-bit mask per set square, lowest square first.
    #[inline]
    pub fn masks(self) -> SquareMasks {
        SquareMasks(self.0)
    }

    /// Set square indices, lowest first.
    #[inline]
    pub fn squares(self) -> Squares {
        Squares(self.0)
    }
}

pub struct SquareMasks(u64);

impl Iterator for SquareMasks {
    type Item = Bitboard;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let lowest = self.0 & self.0.wrapping_neg();
        self.0 ^= lowest;
        Some(Bitboard(lowest))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareMasks {}

pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Squares {}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#018x})", self.0)
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let cell = if self.contains(rank * 8 + file) { 'X' } else { '.' };
                write!(f, "{cell} ")?;
            }
            writeln!(f, "{}", rank + 1)?;
        }
        write!(f, "a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Bitboard;
    use crate::bitboard::direction::Direction;

    const A1: u8 = 0;
    const H1: u8 = 7;
    const D4: u8 = 27;
    const A8: u8 = 56;
    const H8: u8 = 63;

    #[test]
    fn shifts_move_one_square() {
        let d4 = Bitboard::from_square(D4);
        assert_eq!(d4.up(), Bitboard::from_square(D4 + 8));
        assert_eq!(d4.down(), Bitboard::from_square(D4 - 8));
        assert_eq!(d4.left(), Bitboard::from_square(D4 - 1));
        assert_eq!(d4.right(), Bitboard::from_square(D4 + 1));
        assert_eq!(d4.shift(Direction::UpLeft), Bitboard::from_square(D4 + 7));
        assert_eq!(d4.shift(Direction::DownRight), Bitboard::from_square(D4 - 7));
    }

    #[test]
    fn shifts_never_wrap_around_edges() {
        assert!(Bitboard::from_square(A1).left().is_empty());
        assert!(Bitboard::from_square(H1).right().is_empty());
        assert!(Bitboard::from_square(A1).down().is_empty());
        assert!(Bitboard::from_square(H8).up().is_empty());
        assert!(Bitboard::FILE_H.right().is_empty());
        assert!(Bitboard::FILE_A.left().is_empty());
        assert_eq!(Bitboard::from_square(A8).shift(Direction::UpRight), Bitboard::EMPTY);
    }

    #[test]
    fn n_ary_operators() {
        let a = Bitboard(0b1100);
        let b = Bitboard(0b1010);
        let c = Bitboard(0b1001);
        assert_eq!(Bitboard::union_all([a, b, c]), Bitboard(0b1111));
        assert_eq!(Bitboard::intersection_all([a, b, c]), Bitboard(0b1000));
        assert_eq!(Bitboard::xor_all([a, b, c]), Bitboard(0b1111));
        assert_eq!(Bitboard::union_all([]), Bitboard::EMPTY);
        assert_eq!(Bitboard::intersection_all([]), Bitboard::FULL);
        assert_eq!(!Bitboard::EMPTY, Bitboard::FULL);
    }

    #[test]
    fn decomposition_is_lowest_first_and_complete() {
        let board = Bitboard::from_square(H8) | Bitboard::from_square(A1) | Bitboard::from_square(D4);
        let masks: Vec<Bitboard> = board.masks().collect();
        assert_eq!(
            masks,
            vec![
                Bitboard::from_square(A1),
                Bitboard::from_square(D4),
                Bitboard::from_square(H8)
            ]
        );
        assert_eq!(Bitboard::union_all(masks), board);
        assert_eq!(board.squares().collect::<Vec<_>>(), vec![A1, D4, H8]);
        assert_eq!(board.masks().len(), 3);
    }

    #[test]
    fn first_and_last_square() {
        let board = Bitboard::from_square(D4) | Bitboard::from_square(A8);
        assert_eq!(board.first_square(), Some(D4));
        assert_eq!(board.last_square(), Some(A8));
        assert_eq!(Bitboard::EMPTY.first_square(), None);
    }

    #[test]
    #[should_panic(expected = "single-square mask")]
    fn single_square_rejects_multi_bit_masks() {
        (Bitboard::RANK_1).single_square();
    }

    #[test]
    fn light_squares_contain_b1_not_a1() {
        assert!(Bitboard::LIGHT_SQUARES.contains(1));
        assert!(!Bitboard::LIGHT_SQUARES.contains(A1));
        assert!(!Bitboard::LIGHT_SQUARES.contains(H8));
        assert_eq!(Bitboard::LIGHT_SQUARES.count(), 32);
    }
}
