//! The persistent game node.
//!
//! A `Game` wraps a `GameState` snapshot with the history needed for draw
//! rules. Successors are always fresh values: the position-count map sits
//! behind an `Arc` and is cloned before it is changed, so any number of
//! callers can branch from the same ancestor.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::bitboard::bitboard::Bitboard;
use crate::game_state::chess_types::*;
use crate::game_state::game_result::GameResult;
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::game_state::position_key::PositionKey;
use crate::game_state::terminal::detect_result;
use crate::move_generation::legal_move_generator::{count_legal_moves, generate_legal_moves};
use crate::move_generation::move_generator::GeneratedMove;
use crate::moves::move_descriptions::{LastMove, MoveId};

/// Legal successors keyed by move identifier, in identifier order.
pub type LegalMoves = BTreeMap<MoveId, Game>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
    position_counts: Arc<HashMap<PositionKey, u32>>,
    last_move: Option<LastMove>,
    result: Option<GameResult>,
}

/// Start a game from an arbitrary position with empty history.
///
/// Panics on a corrupt snapshot (see `GameState::new`).
pub fn create_game_from_position(
    position: Position,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Bitboard,
    halfmove_clock: u16,
    fullmove_number: u16,
) -> Game {
    let state = GameState::new(
        position,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    );
    debug!(
        side_to_move = ?side_to_move,
        castling_rights,
        halfmove_clock,
        fullmove_number,
        "created game from position"
    );
    Game::from_state(state)
}

impl Game {
    /// The standard starting position.
    pub fn new_game() -> Self {
        create_game_from_position(Position::starting(), Color::White, CASTLE_ALL, Bitboard::EMPTY, 0, 1)
    }

    /// Wrap a snapshot that has already been validated.
    pub fn from_state(state: GameState) -> Self {
        let mut position_counts = HashMap::new();
        position_counts.insert(state.position_key(), 1);
        Self {
            state,
            position_counts: Arc::new(position_counts),
            last_move: None,
            result: None,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.state.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.state.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Bitboard {
        self.state.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.state.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.state.fullmove_number
    }

    #[inline]
    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    /// Set once by `apply_result`; successors always start without one.
    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Occurrences of each key since the last irreversible ply.
    #[inline]
    pub fn position_counts(&self) -> &HashMap<PositionKey, u32> {
        &self.position_counts
    }

    pub fn position_count(&self, key: &PositionKey) -> u32 {
        self.position_counts.get(key).copied().unwrap_or(0)
    }

    #[inline]
    pub fn position_key(&self) -> PositionKey {
        self.state.position_key()
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.state.is_in_check()
    }

    /// The outcome this node resolves to, without storing it.
    fn pending_result(&self, has_legal_moves: bool) -> Option<GameResult> {
        self.result
            .or_else(|| detect_result(&self.state, &self.position_counts, has_legal_moves))
    }

    /// Whether the game has ended here, whether or not `result` is stored.
    pub fn is_terminal(&self) -> bool {
        self.result.is_some() || self.pending_result(count_legal_moves(&self.state) > 0).is_some()
    }

    /// Every legal successor. Empty exactly when the game is terminal.
    pub fn legal_moves(&self) -> LegalMoves {
        if self.result.is_some() {
            return LegalMoves::new();
        }

        let generated = generate_legal_moves(&self.state);
        if self.pending_result(!generated.is_empty()).is_some() {
            return LegalMoves::new();
        }

        generated
            .iter()
            .map(|mv| (mv.candidate.id(), self.successor(mv)))
            .collect()
    }

    /// A copy with `result` filled in. Returns an unchanged copy once a
    /// result is stored or while the game is still running.
    pub fn apply_result(&self) -> Game {
        if self.result.is_some() {
            return self.clone();
        }

        let result = self.pending_result(count_legal_moves(&self.state) > 0);
        if let Some(result) = result {
            debug!(
                %result,
                fullmove_number = self.state.fullmove_number,
                "game result assigned"
            );
        }

        Game {
            result,
            ..self.clone()
        }
    }

    /// The successor reached by the long-algebraic move `notation`
    /// (`e2e4`, `e7e8q`, castling as `e1g1`), if it is legal here.
    pub fn play(&self, notation: &str) -> Option<Game> {
        self.legal_moves()
            .into_iter()
            .find(|(id, _)| id.to_string() == notation)
            .map(|(_, game)| game)
    }

    fn successor(&self, mv: &GeneratedMove) -> Game {
        let next = mv.state_after_move;
        let key = next.position_key();

        // Keys from before a pawn move, capture or lost castling right can
        // never recur, so the count restarts.
        let irreversible = mv.candidate.piece == PieceKind::Pawn
            || mv.candidate.is_capture()
            || next.castling_rights != self.state.castling_rights;

        let position_counts = if irreversible {
            let mut fresh = HashMap::new();
            fresh.insert(key, 1);
            Arc::new(fresh)
        } else {
            let mut counts = self.position_counts.clone();
            *Arc::make_mut(&mut counts).entry(key).or_insert(0) += 1;
            counts
        };

        Game {
            state: next,
            position_counts,
            last_move: Some(LastMove::from_candidate(self.state.side_to_move, &mv.candidate)),
            result: None,
        }
    }
}
