use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::CandidateMove;

/// A legal move together with the snapshot it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub candidate: CandidateMove,
    pub state_after_move: GameState,
}

/// Source of legal moves for one snapshot.
///
/// Perft is written against this trait so node counting can be checked
/// independently of the real generator.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}
