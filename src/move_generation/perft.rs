//! Perft: exhaustive move-tree node counting.
//!
//! Counting runs on `GameState` snapshots and follows only the move rules;
//! draw claims never cut the tree short. The `Game` entry points honour a
//! root that is already terminal.

use std::thread;

use tracing::trace;

use crate::game_state::game::Game;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{count_legal_moves, generate_legal_moves};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_descriptions::{MoveFlag, MoveId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count of the legal move tree below `game`; depth 0 returns 1.
pub fn count_leaf_nodes(game: &Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if game.is_terminal() {
        return 0;
    }
    count_state_leaves(game.state(), depth)
}

/// Leaf count per legal root move, in move-identifier order.
pub fn perft_divide(game: &Game, depth: u8) -> Vec<(MoveId, u64)> {
    if depth == 0 || game.is_terminal() {
        return Vec::new();
    }

    let mut divide: Vec<(MoveId, u64)> = generate_legal_moves(game.state())
        .iter()
        .map(|mv| {
            let id = mv.candidate.id();
            let nodes = count_state_leaves(&mv.state_after_move, depth - 1);
            trace!(%id, nodes, "perft divide");
            (id, nodes)
        })
        .collect();
    divide.sort_by_key(|(id, _)| *id);
    divide
}

/// Depth 1 is counted in bulk without building the successor states.
fn count_state_leaves(game_state: &GameState, depth: u8) -> u64 {
    match depth {
        0 => 1,
        1 => count_legal_moves(game_state) as u64,
        _ => generate_legal_moves(game_state)
            .iter()
            .map(|mv| count_state_leaves(&mv.state_after_move, depth - 1))
            .sum(),
    }
}

/// Node count with per-leaf statistics about the move that reached it.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, &mv, depth, 1, &mut total);
    }
    total
}

/// `perft` with one scoped worker thread per root move.
pub fn perft_multi_threaded<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return perft(generator, game_state, depth);
    }

    let root_moves = generator.generate_legal_moves(game_state);
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(generator, mv, depth, 1, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        total
    })
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;

        if mv.candidate.is_capture() {
            counts.captures += 1;
        }
        match mv.candidate.flag {
            MoveFlag::EnPassant => counts.en_passant += 1,
            MoveFlag::Castle(_) => counts.castles += 1,
            _ => {}
        }
        if mv.candidate.promotion.is_some() {
            counts.promotions += 1;
        }

        if mv.state_after_move.is_in_check() {
            counts.checks += 1;
            if generator
                .generate_legal_moves(&mv.state_after_move)
                .is_empty()
            {
                counts.checkmates += 1;
            }
        }
        return;
    }

    for child in generator.generate_legal_moves(&mv.state_after_move) {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts);
    }
}
