//! Sliding-piece geometry.
//!
//! `sliding_fill` is the shift-based flood used for whole-side attack sets:
//! it accepts any number of starting squares and grows every frontier one
//! square per step until it leaves the board or hits a piece. Single-square
//! lookups during move generation go through the precomputed `RAYS` table
//! instead, cutting each ray at its first blocker.

use crate::bitboard::bitboard::Bitboard;
use crate::bitboard::direction::Direction;
use crate::game_state::chess_types::Square;

/// No ray on an 8x8 board is longer than this.
pub const MAX_SLIDE_STEPS: u32 = 8;

/// `RAYS[direction][square]`: every square from `square` (exclusive) to the
/// board edge in `direction`, ignoring occupancy.
pub const RAYS: [[Bitboard; 64]; 8] = generate_rays();

/// Squares a slider standing on `start` could stop on in `direction`.
///
/// Empty squares are included up to the first piece. That piece's square is
/// included only when it is in `capturable`, and nothing beyond it is.
/// `start` may hold several sliders at once.
///
/// Panics if the frontier is still alive after `MAX_SLIDE_STEPS` steps,
/// which only happens on a corrupt mask.
pub fn sliding_fill(
    occupancy: Bitboard,
    capturable: Bitboard,
    start: Bitboard,
    direction: Direction,
) -> Bitboard {
    let open = !occupancy;
    let mut reachable = Bitboard::EMPTY;
    let mut frontier = start.shift(direction);
    let mut steps = 0u32;

    while !frontier.is_empty() {
        steps += 1;
        assert!(
            steps <= MAX_SLIDE_STEPS,
            "sliding fill toward {direction:?} exceeded {MAX_SLIDE_STEPS} steps"
        );
        reachable |= frontier & (open | capturable);
        frontier = (frontier & open).shift(direction);
    }

    reachable
}

/// Union of `sliding_fill` over several directions.
pub fn sliding_fill_all(
    occupancy: Bitboard,
    capturable: Bitboard,
    start: Bitboard,
    directions: &[Direction],
) -> Bitboard {
    directions.iter().fold(Bitboard::EMPTY, |acc, &direction| {
        acc | sliding_fill(occupancy, capturable, start, direction)
    })
}

/// Ray from `square` in `direction`, cut after the first occupied square.
/// The blocker itself is included whatever its colour.
#[inline]
pub fn ray_attacks(square: Square, occupancy: Bitboard, direction: Direction) -> Bitboard {
    let ray = RAYS[direction.index()][square as usize];
    let blockers = ray & occupancy;
    let first_blocker = if direction.is_ascending() {
        blockers.first_square()
    } else {
        blockers.last_square()
    };

    match first_blocker {
        Some(blocker) => ray ^ RAYS[direction.index()][blocker as usize],
        None => ray,
    }
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, Direction::Up)
        | ray_attacks(square, occupancy, Direction::Down)
        | ray_attacks(square, occupancy, Direction::Left)
        | ray_attacks(square, occupancy, Direction::Right)
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, Direction::UpLeft)
        | ray_attacks(square, occupancy, Direction::UpRight)
        | ray_attacks(square, occupancy, Direction::DownLeft)
        | ray_attacks(square, occupancy, Direction::DownRight)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

const fn generate_rays() -> [[Bitboard; 64]; 8] {
    let mut table = [[Bitboard::EMPTY; 64]; 8];
    let mut dir = 0usize;

    while dir < 8 {
        let (file_step, rank_step) = Direction::ALL[dir].steps();
        let mut sq = 0usize;
        while sq < 64 {
            table[dir][sq] = trace_ray_const(sq as i32, file_step, rank_step);
            sq += 1;
        }
        dir += 1;
    }

    table
}

const fn trace_ray_const(square: i32, file_step: i32, rank_step: i32) -> Bitboard {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut ray = 0u64;

    while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
        ray |= 1u64 << (rank * 8 + file);
        file += file_step;
        rank += rank_step;
    }

    Bitboard(ray)
}
