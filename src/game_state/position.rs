//! Piece placement: one bitboard per coloured piece kind.
//!
//! A `Position` is twelve plain integers, so successors are built by value
//! copy and never share storage with their parent.

use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    // [color][piece_kind]
    pieces: [[Bitboard; 6]; 2],
}

impl Position {
    pub const fn empty() -> Self {
        Self {
            pieces: [[Bitboard::EMPTY; 6]; 2],
        }
    }

    /// The standard opening layout.
    pub fn starting() -> Self {
        let mut position = Self::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            let file = file as Square;
            position.put(Piece::new(Color::White, kind), file);
            position.put(Piece::new(Color::Black, kind), 56 + file);
        }
        position.set_pieces(Piece::new(Color::White, PieceKind::Pawn), Bitboard::RANK_2);
        position.set_pieces(Piece::new(Color::Black, PieceKind::Pawn), Bitboard::RANK_7);
        position
    }

    /// Build from `(piece, square)` pairs. Later entries do not evict
    /// earlier ones, so duplicates produce an overlapping position.
    pub fn from_placements<I: IntoIterator<Item = (Piece, Square)>>(placements: I) -> Self {
        let mut position = Self::empty();
        for (piece, square) in placements {
            position.put(piece, square);
        }
        position
    }

    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.color.index()][piece.kind.index()]
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn set_pieces(&mut self, piece: Piece, board: Bitboard) {
        self.pieces[piece.color.index()][piece.kind.index()] = board;
    }

    #[inline]
    pub fn put(&mut self, piece: Piece, square: Square) {
        self.pieces[piece.color.index()][piece.kind.index()] |= Bitboard::from_square(square);
    }

    #[inline]
    pub fn remove(&mut self, piece: Piece, square: Square) {
        self.pieces[piece.color.index()][piece.kind.index()] &= !Bitboard::from_square(square);
    }

    #[inline]
    pub fn occupancy_of(&self, color: Color) -> Bitboard {
        let side = &self.pieces[color.index()];
        side[0] | side[1] | side[2] | side[3] | side[4] | side[5]
    }

    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.occupancy_of(Color::White) | self.occupancy_of(Color::Black)
    }

    /// Kind of `color`'s piece on `square`, if any.
    #[inline]
    pub fn kind_at(&self, color: Color, square: Square) -> Option<PieceKind> {
        let mask = Bitboard::from_square(square);
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()].intersects(mask))
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        Color::ALL.into_iter().find_map(|color| {
            self.kind_at(color, square)
                .map(|kind| Piece::new(color, kind))
        })
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, PieceKind::King).first_square()
    }

    /// All twelve (piece, bitboard) pairs, white first.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Bitboard)> + '_ {
        Color::ALL.into_iter().flat_map(move |color| {
            PieceKind::ALL
                .into_iter()
                .map(move |kind| (Piece::new(color, kind), self.pieces_of(color, kind)))
        })
    }

    /// Squares claimed by more than one piece kind.
    pub fn overlapping_squares(&self) -> Bitboard {
        let mut seen = Bitboard::EMPTY;
        let mut overlap = Bitboard::EMPTY;
        for (_, board) in self.iter() {
            overlap |= seen & board;
            seen |= board;
        }
        overlap
    }

    #[inline]
    pub fn is_disjoint(&self) -> bool {
        self.overlapping_squares().is_empty()
    }
}
