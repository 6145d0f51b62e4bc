use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::CandidateMove;

/// Emit one plain move per square in `targets`, tagging captures with the
/// enemy piece found there. `targets` must already exclude friendly squares.
#[inline]
pub fn push_targets(
    game_state: &GameState,
    from: Square,
    piece: PieceKind,
    targets: Bitboard,
    out: &mut Vec<CandidateMove>,
) {
    let enemy = game_state.side_to_move.opposite();
    let enemy_occ = game_state.enemy_occupancy();

    for to in targets.squares() {
        let captured = if enemy_occ.contains(to) {
            game_state.position.kind_at(enemy, to)
        } else {
            None
        };
        out.push(CandidateMove::new(from, to, piece, captured));
    }
}

/// Every square of the side to move's pieces of `kind`.
#[inline]
pub fn own_pieces(game_state: &GameState, kind: PieceKind) -> Bitboard {
    game_state
        .position
        .pieces_of(game_state.side_to_move, kind)
}
