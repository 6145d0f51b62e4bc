use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{own_pieces, push_targets};
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::CandidateMove;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<CandidateMove>) {
    let own_occ = game_state.own_occupancy();

    for from in own_pieces(game_state, PieceKind::Knight).squares() {
        let targets = knight_attacks(from) & !own_occ;
        push_targets(game_state, from, PieceKind::Knight, targets, out);
    }
}
