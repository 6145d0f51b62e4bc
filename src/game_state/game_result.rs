use std::fmt;

use crate::game_state::chess_types::Color;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Stalemate,
    DeadPosition,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl GameResult {
    /// Checkmate delivered by `winner`.
    #[inline]
    pub const fn checkmate_by(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        self.winner().is_none()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::WhiteWins => "white wins by checkmate",
            GameResult::BlackWins => "black wins by checkmate",
            GameResult::Stalemate => "draw by stalemate",
            GameResult::DeadPosition => "draw by dead position",
            GameResult::ThreefoldRepetition => "draw by threefold repetition",
            GameResult::FiftyMoveRule => "draw by fifty-move rule",
        };
        f.write_str(text)
    }
}
