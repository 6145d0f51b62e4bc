//! Bishop, rook and queen generation.
//!
//! Each slider reaches the union of its rays minus friendly squares; a ray
//! ends on the first piece and keeps that square only if it is an enemy.

use crate::bitboard::sliding::{bishop_attacks, queen_attacks, rook_attacks};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{own_pieces, push_targets};
use crate::moves::move_descriptions::CandidateMove;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<CandidateMove>) {
    generate_slider_moves(game_state, PieceKind::Bishop, out);
}

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<CandidateMove>) {
    generate_slider_moves(game_state, PieceKind::Rook, out);
}

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<CandidateMove>) {
    generate_slider_moves(game_state, PieceKind::Queen, out);
}

fn generate_slider_moves(game_state: &GameState, kind: PieceKind, out: &mut Vec<CandidateMove>) {
    let occupancy = game_state.position.occupancy();
    let own_occ = game_state.own_occupancy();

    for from in own_pieces(game_state, kind).squares() {
        let reach = match kind {
            PieceKind::Bishop => bishop_attacks(from, occupancy),
            PieceKind::Rook => rook_attacks(from, occupancy),
            PieceKind::Queen => queen_attacks(from, occupancy),
            _ => unreachable!("{kind:?} is not a sliding piece"),
        };
        push_targets(game_state, from, kind, reach & !own_occ, out);
    }
}
