//! End-of-game detection.

use std::collections::HashMap;

use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_types::*;
use crate::game_state::game_result::GameResult;
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::game_state::position_key::PositionKey;

pub const REPETITION_LIMIT: u32 = 3;
pub const FIFTY_MOVE_PLIES: u16 = 100;

/// Neither side can ever deliver mate.
///
/// Holds when no pawns, rooks or queens remain and either every bishop on
/// the board stands on one square colour with no knights present (this
/// covers bare kings and a lone bishop), or a single knight faces a bare
/// king.
pub fn is_dead_position(position: &Position) -> bool {
    let heavy_or_pawn = Color::ALL.iter().any(|&color| {
        !(position.pieces_of(color, PieceKind::Pawn)
            | position.pieces_of(color, PieceKind::Rook)
            | position.pieces_of(color, PieceKind::Queen))
        .is_empty()
    });
    if heavy_or_pawn {
        return false;
    }

    let bishops = position.pieces_of(Color::White, PieceKind::Bishop)
        | position.pieces_of(Color::Black, PieceKind::Bishop);
    let knights = position.pieces_of(Color::White, PieceKind::Knight)
        | position.pieces_of(Color::Black, PieceKind::Knight);

    if knights.is_empty() {
        let on_light = bishops & Bitboard::LIGHT_SQUARES;
        return on_light.is_empty() || on_light == bishops;
    }

    bishops.is_empty() && knights.count() == 1
}

/// The outcome for `game_state`, if the game is over.
///
/// Checked in order: no legal moves (checkmate or stalemate), dead
/// position, a repeated key reaching three occurrences, then the
/// fifty-move clock.
pub fn detect_result(
    game_state: &GameState,
    position_counts: &HashMap<PositionKey, u32>,
    has_legal_moves: bool,
) -> Option<GameResult> {
    if !has_legal_moves {
        return Some(if game_state.is_in_check() {
            GameResult::checkmate_by(game_state.side_to_move.opposite())
        } else {
            GameResult::Stalemate
        });
    }

    if is_dead_position(&game_state.position) {
        return Some(GameResult::DeadPosition);
    }

    if position_counts
        .values()
        .any(|&count| count >= REPETITION_LIMIT)
    {
        return Some(GameResult::ThreefoldRepetition);
    }

    if game_state.halfmove_clock >= FIFTY_MOVE_PLIES {
        return Some(GameResult::FiftyMoveRule);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(pieces: &[(Color, PieceKind, Square)]) -> Position {
        Position::from_placements(
            pieces
                .iter()
                .map(|&(color, kind, square)| (Piece::new(color, kind), square)),
        )
    }

    const KINGS: [(Color, PieceKind, Square); 2] =
        [(Color::White, PieceKind::King, 4), (Color::Black, PieceKind::King, 60)];

    fn with(extra: &[(Color, PieceKind, Square)]) -> Position {
        let mut pieces = KINGS.to_vec();
        pieces.extend_from_slice(extra);
        position(&pieces)
    }

    #[test]
    fn bare_kings_and_single_minor_are_dead() {
        assert!(is_dead_position(&with(&[])));
        assert!(is_dead_position(&with(&[(Color::White, PieceKind::Bishop, 2)])));
        assert!(is_dead_position(&with(&[(Color::Black, PieceKind::Knight, 57)])));
    }

    #[test]
    fn same_colour_bishops_are_dead() {
        // c1 and f8 are both dark squares.
        assert!(is_dead_position(&with(&[
            (Color::White, PieceKind::Bishop, 2),
            (Color::Black, PieceKind::Bishop, 61),
        ])));
        // c1 dark, c8 light.
        assert!(!is_dead_position(&with(&[
            (Color::White, PieceKind::Bishop, 2),
            (Color::Black, PieceKind::Bishop, 58),
        ])));
    }

    #[test]
    fn mating_material_is_alive() {
        assert!(!is_dead_position(&with(&[(Color::White, PieceKind::Pawn, 12)])));
        assert!(!is_dead_position(&with(&[(Color::White, PieceKind::Rook, 0)])));
        assert!(!is_dead_position(&with(&[
            (Color::White, PieceKind::Knight, 1),
            (Color::White, PieceKind::Knight, 6),
        ])));
        assert!(!is_dead_position(&with(&[
            (Color::White, PieceKind::Knight, 1),
            (Color::Black, PieceKind::Bishop, 58),
        ])));
        assert!(!is_dead_position(&Position::starting()));
    }

    #[test]
    fn no_moves_resolves_to_mate_or_stalemate() {
        // Black king h8, white queen g7 protected by king f6: mate.
        let mated = GameState::new(
            position(&[
                (Color::Black, PieceKind::King, 63),
                (Color::White, PieceKind::Queen, 54),
                (Color::White, PieceKind::King, 45),
            ]),
            Color::Black,
            CASTLE_NONE,
            Bitboard::EMPTY,
            0,
            40,
        );
        assert_eq!(detect_result(&mated, &HashMap::new(), false), Some(GameResult::WhiteWins));

        // Black king h8, white queen g6: stalemate.
        let stalemated = GameState::new(
            position(&[
                (Color::Black, PieceKind::King, 63),
                (Color::White, PieceKind::Queen, 46),
                (Color::White, PieceKind::King, 4),
            ]),
            Color::Black,
            CASTLE_NONE,
            Bitboard::EMPTY,
            0,
            40,
        );
        assert_eq!(detect_result(&stalemated, &HashMap::new(), false), Some(GameResult::Stalemate));
    }

    #[test]
    fn draw_rules_in_priority_order() {
        let live = GameState::new(
            with(&[(Color::White, PieceKind::Rook, 0)]),
            Color::White,
            CASTLE_NONE,
            Bitboard::EMPTY,
            FIFTY_MOVE_PLIES,
            80,
        );
        let mut counts = HashMap::new();
        counts.insert(live.position_key(), REPETITION_LIMIT);
        assert_eq!(detect_result(&live, &counts, true), Some(GameResult::ThreefoldRepetition));

        counts.insert(live.position_key(), REPETITION_LIMIT - 1);
        assert_eq!(detect_result(&live, &counts, true), Some(GameResult::FiftyMoveRule));

        let fresh = GameState { halfmove_clock: FIFTY_MOVE_PLIES - 1, ..live };
        assert_eq!(detect_result(&fresh, &counts, true), None);

        let dead = GameState::new(with(&[]), Color::White, CASTLE_NONE, Bitboard::EMPTY, FIFTY_MOVE_PLIES, 80);
        assert_eq!(detect_result(&dead, &counts, true), Some(GameResult::DeadPosition));
    }
}
