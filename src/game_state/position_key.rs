use crate::game_state::chess_types::{CastlingRights, Color};
use crate::game_state::position::Position;

/// Canonical repetition key: pieces, side to move, castling rights and the
/// en-passant file. Move clocks are deliberately left out, so two visits to
/// the same position at different move numbers compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    position: Position,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_file: Option<u8>,
}

impl PositionKey {
    pub fn new(
        position: Position,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_file: Option<u8>,
    ) -> Self {
        Self {
            position,
            side_to_move,
            castling_rights,
            en_passant_file,
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}
