//! Square conversions for algebraic coordinates (`e4` <-> 28).

use crate::game_state::chess_types::Square;

/// Parse a coordinate such as `e4`. `None` for anything else.
#[inline]
pub fn algebraic_to_square(square: &str) -> Option<Square> {
    let &[file, rank] = square.as_bytes() else {
        return None;
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    Some((rank - b'1') * 8 + (file - b'a'))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    debug_assert!(square < 64, "square index out of bounds: {square}");
    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    format!("{file_char}{rank_char}")
}
