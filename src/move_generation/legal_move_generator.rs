//! Full legal move generation pipeline.
//!
//! Runs every per-piece pseudo-legal generator, applies each candidate and
//! drops those that leave the mover's own king attacked.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_descriptions::CandidateMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        generate_legal_moves(game_state)
    }
}

/// Every candidate obeying piece patterns and occupancy, legality unchecked.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<CandidateMove> {
    let mut pseudo = Vec::with_capacity(64);

    generate_pawn_moves(game_state, &mut pseudo);
    generate_knight_moves(game_state, &mut pseudo);
    generate_bishop_moves(game_state, &mut pseudo);
    generate_rook_moves(game_state, &mut pseudo);
    generate_queen_moves(game_state, &mut pseudo);
    generate_king_moves(game_state, &mut pseudo);

    pseudo
}

pub fn generate_legal_moves(game_state: &GameState) -> Vec<GeneratedMove> {
    let mover = game_state.side_to_move;

    generate_pseudo_legal_moves(game_state)
        .into_iter()
        .filter_map(|candidate| {
            let next = apply_move(game_state, &candidate);
            // Illegal if own king is in check after move.
            if is_in_check(&next.position, mover) {
                return None;
            }
            Some(GeneratedMove {
                candidate,
                state_after_move: next,
            })
        })
        .collect()
}

/// Number of legal moves, i.e. the perft count at depth 1.
pub fn count_legal_moves(game_state: &GameState) -> usize {
    let mover = game_state.side_to_move;
    generate_pseudo_legal_moves(game_state)
        .iter()
        .filter(|candidate| !is_in_check(&apply_move(game_state, candidate).position, mover))
        .count()
}
