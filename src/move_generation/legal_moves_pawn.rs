use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_rules::{pawn_backward, pawn_forward, pawn_start_rank, promotion_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::own_pieces;
use crate::moves::move_descriptions::{CandidateMove, MoveFlag};
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<CandidateMove>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let empty = !game_state.position.occupancy();
    let enemy_occ = game_state.enemy_occupancy();
    let last_rank = promotion_rank(side);

    for from in own_pieces(game_state, PieceKind::Pawn).squares() {
        let from_mask = Bitboard::from_square(from);

        let single = pawn_forward(side, from_mask) & empty;
        if let Some(to) = single.first_square() {
            push_pawn_move(out, CandidateMove::new(from, to, PieceKind::Pawn, None), last_rank);

            // The intermediate square is `single`, already known empty.
            if from_mask.intersects(pawn_start_rank(side)) {
                let double = pawn_forward(side, single) & empty;
                if let Some(to) = double.first_square() {
                    out.push(
                        CandidateMove::new(from, to, PieceKind::Pawn, None)
                            .with_flag(MoveFlag::DoublePawnPush),
                    );
                }
            }
        }

        let attacks = pawn_attacks(side, from);
        for to in (attacks & enemy_occ).squares() {
            let captured = game_state.position.kind_at(enemy, to);
            push_pawn_move(out, CandidateMove::new(from, to, PieceKind::Pawn, captured), last_rank);
        }

        // The victim sits one rank behind the target; a target with no enemy
        // pawn behind it is stale and never offered.
        let ep = attacks & game_state.en_passant_target;
        if let Some(to) = ep.first_square() {
            let victim = pawn_backward(side, ep);
            if victim.intersects(game_state.position.pieces_of(enemy, PieceKind::Pawn)) {
                out.push(
                    CandidateMove::new(from, to, PieceKind::Pawn, Some(PieceKind::Pawn))
                        .with_flag(MoveFlag::EnPassant),
                );
            }
        }
    }
}

/// Push `candidate`, branching into one move per promotion piece when it
/// lands on the far rank.
fn push_pawn_move(out: &mut Vec<CandidateMove>, candidate: CandidateMove, last_rank: Bitboard) {
    if last_rank.contains(candidate.to) {
        for promotion in PieceKind::PROMOTIONS {
            out.push(candidate.with_promotion(promotion));
        }
    } else {
        out.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::Position;

    fn state(
        side: Color,
        pieces: &[(Color, PieceKind, Square)],
        en_passant_target: Bitboard,
    ) -> GameState {
        let position = Position::from_placements(
            pieces
                .iter()
                .map(|&(color, kind, square)| (Piece::new(color, kind), square)),
        );
        GameState::new(position, side, CASTLE_NONE, en_passant_target, 0, 1)
    }

    fn targets(moves: &[CandidateMove]) -> Vec<(Square, Square)> {
        let mut pairs: Vec<_> = moves.iter().map(|mv| (mv.from, mv.to)).collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn starting_pawns_push_once_and_twice() {
        let game_state = GameState::new(Position::starting(), Color::White, CASTLE_ALL, Bitboard::EMPTY, 0, 1);
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);
        assert_eq!(moves.len(), 16);
        assert_eq!(
            moves
                .iter()
                .filter(|mv| mv.flag == MoveFlag::DoublePawnPush)
                .count(),
            8
        );
    }

    #[test]
    fn blocked_pawn_has_no_double_push() {
        // e2 pawn, black knight on e3 blocks both pushes.
        let game_state = state(
            Color::White,
            &[(Color::White, PieceKind::Pawn, 12), (Color::Black, PieceKind::Knight, 20)],
            Bitboard::EMPTY,
        );
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);
        assert!(moves.is_empty());

        // Knight on e4 blocks only the double push.
        let game_state = state(
            Color::White,
            &[(Color::White, PieceKind::Pawn, 12), (Color::Black, PieceKind::Knight, 28)],
            Bitboard::EMPTY,
        );
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);
        assert_eq!(targets(&moves), vec![(12, 20)]);
    }

    #[test]
    fn captures_tag_the_victim() {
        // Black pawn d5 takes on c4 or e4.
        let game_state = state(
            Color::Black,
            &[
                (Color::Black, PieceKind::Pawn, 35),
                (Color::White, PieceKind::Rook, 26),
                (Color::White, PieceKind::Bishop, 28),
                (Color::White, PieceKind::Pawn, 27),
            ],
            Bitboard::EMPTY,
        );
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);
        assert_eq!(targets(&moves), vec![(35, 26), (35, 28)]);
        assert!(moves.iter().all(CandidateMove::is_capture));
    }

    #[test]
    fn promotion_branches_four_ways() {
        let game_state = state(
            Color::White,
            &[(Color::White, PieceKind::Pawn, 52), (Color::Black, PieceKind::Rook, 61)],
            Bitboard::EMPTY,
        );
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);
        assert_eq!(moves.len(), 8);
        for promotion in PieceKind::PROMOTIONS {
            assert!(moves.iter().any(|mv| mv.to == 60 && mv.promotion == Some(promotion)));
            assert!(moves.iter().any(|mv| mv.to == 61 && mv.promotion == Some(promotion)));
        }
    }

    #[test]
    fn en_passant_removes_pawn_behind_target() {
        // White pawn e5, black pawn just played d7-d5.
        let game_state = state(
            Color::White,
            &[(Color::White, PieceKind::Pawn, 36), (Color::Black, PieceKind::Pawn, 35)],
            Bitboard::from_square(43),
        );
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);
        let ep: Vec<_> = moves
            .iter()
            .filter(|mv| mv.flag == MoveFlag::EnPassant)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!((ep[0].from, ep[0].to), (36, 43));
        assert_eq!(ep[0].captured, Some(PieceKind::Pawn));
    }
}
