//! Attack sets and check detection.
//!
//! Everything here is recomputed from the raw position on every call; no
//! cached "in check" flag exists anywhere in the crate.

use crate::bitboard::bitboard::Bitboard;
use crate::bitboard::direction::Direction;
use crate::bitboard::sliding::{bishop_attacks, rook_attacks, sliding_fill_all};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::{knight_attacks, knight_targets};
use crate::moves::pawn_moves::{pawn_attack_targets, pawn_attacks};

/// Every square attacked by `color`'s pieces other than its king.
///
/// Squares holding either side's pieces count when a piece bears on them,
/// so a defended piece is reported as attacked.
pub fn attacked_squares(position: &Position, color: Color) -> Bitboard {
    let occupancy = position.occupancy();
    let queens = position.pieces_of(color, PieceKind::Queen);
    let orthogonal = position.pieces_of(color, PieceKind::Rook) | queens;
    let diagonal = position.pieces_of(color, PieceKind::Bishop) | queens;

    sliding_fill_all(occupancy, occupancy, orthogonal, &Direction::ORTHOGONAL)
        | sliding_fill_all(occupancy, occupancy, diagonal, &Direction::DIAGONAL)
        | knight_targets(position.pieces_of(color, PieceKind::Knight))
        | pawn_attack_targets(color, position.pieces_of(color, PieceKind::Pawn))
}

/// Squares `color`'s king may not step onto: the opponent's attack set plus
/// the squares around the opponent's king.
pub fn king_danger_squares(position: &Position, color: Color) -> Bitboard {
    let enemy = color.opposite();
    attacked_squares(position, enemy) | king_targets(position.pieces_of(enemy, PieceKind::King))
}

/// Whether any non-king piece of `attacker` bears on `square`.
///
/// Looks outward from `square` with each piece's pattern, which gives the
/// same answer as testing membership in `attacked_squares` without building
/// the whole set.
pub fn is_square_attacked(position: &Position, square: Square, attacker: Color) -> bool {
    let occupancy = position.occupancy();

    if pawn_attacks(attacker.opposite(), square).intersects(position.pieces_of(attacker, PieceKind::Pawn)) {
        return true;
    }

    if knight_attacks(square).intersects(position.pieces_of(attacker, PieceKind::Knight)) {
        return true;
    }

    let queens = position.pieces_of(attacker, PieceKind::Queen);
    let diagonal = position.pieces_of(attacker, PieceKind::Bishop) | queens;
    if bishop_attacks(square, occupancy).intersects(diagonal) {
        return true;
    }

    let orthogonal = position.pieces_of(attacker, PieceKind::Rook) | queens;
    rook_attacks(square, occupancy).intersects(orthogonal)
}

/// Whether `color`'s king is attacked. A side without a king is never in
/// check.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    match position.king_square(color) {
        Some(king) => is_square_attacked(position, king, color.opposite()),
        None => false,
    }
}
