use crate::bitboard::bitboard::Bitboard;
use crate::bitboard::lines::squares_between;
use crate::game_state::chess_rules::castling_route;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::king_danger_squares;
use crate::move_generation::legal_move_shared::{own_pieces, push_targets};
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{CandidateMove, MoveFlag};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<CandidateMove>) {
    let Some(from) = own_pieces(game_state, PieceKind::King).first_square() else {
        return;
    };

    let danger = king_danger_squares(&game_state.position, game_state.side_to_move);
    let targets = king_attacks(from) & !game_state.own_occupancy() & !danger;
    push_targets(game_state, from, PieceKind::King, targets, out);

    generate_castling_moves(game_state, from, danger, out);
}

/// Castling is offered when the right is held, king and rook stand on their
/// home squares, everything between them is empty, and none of the king's
/// start, transit and destination squares is in `danger`.
fn generate_castling_moves(
    game_state: &GameState,
    king_from: Square,
    danger: Bitboard,
    out: &mut Vec<CandidateMove>,
) {
    let side = game_state.side_to_move;
    let occupancy = game_state.position.occupancy();
    let rooks = own_pieces(game_state, PieceKind::Rook);

    for castling_side in CastlingSide::ALL {
        let route = castling_route(side, castling_side);
        if !game_state.has_castling_right(route.right)
            || route.king_from != king_from
            || !rooks.contains(route.rook_from)
        {
            continue;
        }

        if squares_between(route.king_from, route.rook_from).intersects(occupancy) {
            continue;
        }

        let king_path = squares_between(route.king_from, route.king_to)
            | Bitboard::from_square(route.king_from)
            | Bitboard::from_square(route.king_to);
        if king_path.intersects(danger) {
            continue;
        }

        out.push(
            CandidateMove::new(route.king_from, route.king_to, PieceKind::King, None)
                .with_flag(MoveFlag::Castle(castling_side)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::E1;
    use crate::game_state::position::Position;

    fn state(pieces: &[(Color, PieceKind, Square)], rights: CastlingRights) -> GameState {
        let position = Position::from_placements(
            pieces
                .iter()
                .map(|&(color, kind, square)| (Piece::new(color, kind), square)),
        );
        GameState::new(position, Color::White, rights, Bitboard::EMPTY, 0, 1)
    }

    fn castles(game_state: &GameState) -> Vec<CastlingSide> {
        let mut moves = Vec::new();
        generate_king_moves(game_state, &mut moves);
        moves.iter().filter_map(CandidateMove::castling_side).collect()
    }

    const HOME: [(Color, PieceKind, Square); 4] = [
        (Color::White, PieceKind::King, E1),
        (Color::White, PieceKind::Rook, 0),
        (Color::White, PieceKind::Rook, 7),
        (Color::Black, PieceKind::King, 60),
    ];

    #[test]
    fn both_sides_offered_on_clear_board() {
        let game_state = state(&HOME, CASTLE_ALL);
        assert_eq!(castles(&game_state), vec![CastlingSide::Kingside, CastlingSide::Queenside]);
    }

    #[test]
    fn missing_right_suppresses_castling() {
        let game_state = state(&HOME, CASTLE_WHITE_QUEENSIDE);
        assert_eq!(castles(&game_state), vec![CastlingSide::Queenside]);
    }

    #[test]
    fn attacked_transit_square_suppresses_castling() {
        // Black rook on f8 covers f1.
        let mut pieces = HOME.to_vec();
        pieces.push((Color::Black, PieceKind::Rook, 61));
        let game_state = state(&pieces, CASTLE_ALL);
        assert_eq!(castles(&game_state), vec![CastlingSide::Queenside]);
    }

    #[test]
    fn attacked_b_file_square_does_not_matter() {
        // b1 is between king and rook but the king never crosses it.
        let mut pieces = HOME.to_vec();
        pieces.push((Color::Black, PieceKind::Rook, 57));
        let game_state = state(&pieces, CASTLE_ALL);
        assert_eq!(castles(&game_state), vec![CastlingSide::Kingside, CastlingSide::Queenside]);
    }

    #[test]
    fn blocked_path_and_check_suppress_castling() {
        let mut pieces = HOME.to_vec();
        pieces.push((Color::White, PieceKind::Knight, 1));
        let game_state = state(&pieces, CASTLE_ALL);
        assert_eq!(castles(&game_state), vec![CastlingSide::Kingside]);

        let mut pieces = HOME.to_vec();
        pieces.push((Color::Black, PieceKind::Bishop, 25));
        let game_state = state(&pieces, CASTLE_ALL);
        assert!(game_state.is_in_check());
        assert!(castles(&game_state).is_empty());
    }

    #[test]
    fn king_never_steps_next_to_enemy_king() {
        let game_state = state(
            &[(Color::White, PieceKind::King, 20), (Color::Black, PieceKind::King, 36)],
            CASTLE_NONE,
        );
        let mut moves = Vec::new();
        generate_king_moves(&game_state, &mut moves);
        let mut targets: Vec<_> = moves.iter().map(|mv| mv.to).collect();
        targets.sort();
        // e3 king: d2 e2 f2 d3 f3 remain; d4 e4 f4 touch the e5 king.
        assert_eq!(targets, vec![11, 12, 13, 19, 21]);
    }
}
