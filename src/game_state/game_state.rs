//! Board-plus-flags snapshot used by move generation.
//!
//! `GameState` is everything needed to enumerate and apply moves: piece
//! placement, side to move, castling rights, en-passant target and the two
//! clocks. It is `Copy`, so every transition returns a fresh value and the
//! parent stays untouched. History (`Game`) is layered on top.

use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_rules::pawn_backward;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::position_key::PositionKey;
use crate::move_generation::legal_move_checks::is_in_check;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub position: Position,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Empty, or the single square a pawn may capture onto this ply.
    pub en_passant_target: Bitboard,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl GameState {
    /// Panics on a corrupt snapshot: overlapping pieces, more than one
    /// en-passant square, or unknown castling bits.
    pub fn new(
        position: Position,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Bitboard,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let overlap = position.overlapping_squares();
        assert!(
            overlap.is_empty(),
            "position has squares claimed by two piece kinds: {overlap:?}"
        );
        assert!(
            en_passant_target.count() <= 1,
            "en-passant target must hold at most one square: {en_passant_target:?}"
        );
        assert!(
            castling_rights & !CASTLE_ALL == 0,
            "castling rights carry unknown bits: {castling_rights:#06b}"
        );

        Self {
            position,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
        }
    }

    #[inline]
    pub fn own_occupancy(&self) -> Bitboard {
        self.position.occupancy_of(self.side_to_move)
    }

    #[inline]
    pub fn enemy_occupancy(&self) -> Bitboard {
        self.position.occupancy_of(self.side_to_move.opposite())
    }

    /// File (`0..=7`) of the en-passant target, if one is set.
    #[inline]
    pub fn en_passant_file(&self) -> Option<u8> {
        self.en_passant_target.first_square().map(|square| square % 8)
    }

    /// Square of the pawn an en-passant capture onto the target removes.
    #[inline]
    pub fn en_passant_victim(&self) -> Bitboard {
        pawn_backward(self.side_to_move, self.en_passant_target)
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_in_check(&self.position, self.side_to_move)
    }

    pub fn position_key(&self) -> PositionKey {
        PositionKey::new(
            self.position,
            self.side_to_move,
            self.castling_rights,
            self.en_passant_file(),
        )
    }
}
