//! The transition: one candidate move applied to a snapshot.
//!
//! The parent is never touched; the returned state has the opponent to move.
//! Whether the mover's king is left attacked is the caller's concern.

use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_rules::{castling_route, CASTLING_RIGHTS_KEPT};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{CandidateMove, MoveFlag};

/// Build the state after `candidate`.
///
/// Panics when `candidate.from` holds no piece of the side to move, which
/// only happens if the candidate did not come from this state's generator.
pub fn apply_move(game_state: &GameState, candidate: &CandidateMove) -> GameState {
    let mover = game_state.side_to_move;
    let enemy = mover.opposite();
    let moved_piece = game_state
        .position
        .kind_at(mover, candidate.from)
        .unwrap_or_else(|| {
            panic!(
                "no {mover:?} piece on from-square {} for {candidate:?}",
                candidate.from
            )
        });

    let mut next = *game_state;
    next.position.remove(Piece::new(mover, moved_piece), candidate.from);

    // Captures.
    match candidate.flag {
        MoveFlag::EnPassant => {
            let victim = game_state.en_passant_victim();
            let pawns = next.position.pieces_of(enemy, PieceKind::Pawn);
            next.position
                .set_pieces(Piece::new(enemy, PieceKind::Pawn), pawns & !victim);
        }
        _ => {
            if let Some(captured) = game_state.position.kind_at(enemy, candidate.to) {
                next.position.remove(Piece::new(enemy, captured), candidate.to);
            }
        }
    }

    let placed = candidate.promotion.unwrap_or(moved_piece);
    next.position.put(Piece::new(mover, placed), candidate.to);

    if let MoveFlag::Castle(side) = candidate.flag {
        let route = castling_route(mover, side);
        let rook = Piece::new(mover, PieceKind::Rook);
        next.position.remove(rook, route.rook_from);
        next.position.put(rook, route.rook_to);
    }

    next.castling_rights &=
        CASTLING_RIGHTS_KEPT[candidate.from as usize] & CASTLING_RIGHTS_KEPT[candidate.to as usize];

    next.en_passant_target = match candidate.flag {
        MoveFlag::DoublePawnPush => Bitboard::from_square((candidate.from + candidate.to) / 2),
        _ => Bitboard::EMPTY,
    };

    let is_capture = candidate.flag == MoveFlag::EnPassant
        || game_state.enemy_occupancy().contains(candidate.to);
    if moved_piece == PieceKind::Pawn || is_capture {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = enemy;
    next
}
