//! Move records.
//!
//! `CandidateMove` is what the per-piece generators emit and the transition
//! consumes. `MoveId` is the stable key a legal successor is stored under,
//! and `LastMove` is the record a `Game` keeps of the ply that produced it.

use std::fmt;

use crate::game_state::chess_types::{CastlingSide, Color, Piece, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

/// Special handling a candidate needs in the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    Normal,
    DoublePawnPush,
    EnPassant,
    Castle(CastlingSide),
}

/// A pseudo-legal move: obeys the piece's pattern and occupancy, not yet
/// checked for leaving the mover's king attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub flag: MoveFlag,
}

impl CandidateMove {
    #[inline]
    pub fn new(from: Square, to: Square, piece: PieceKind, captured: Option<PieceKind>) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            promotion: None,
            flag: MoveFlag::Normal,
        }
    }

    #[inline]
    pub fn with_flag(mut self, flag: MoveFlag) -> Self {
        self.flag = flag;
        self
    }

    #[inline]
    pub fn with_promotion(mut self, promotion: PieceKind) -> Self {
        self.promotion = Some(promotion);
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn castling_side(&self) -> Option<CastlingSide> {
        match self.flag {
            MoveFlag::Castle(side) => Some(side),
            _ => None,
        }
    }

    #[inline]
    pub fn id(&self) -> MoveId {
        MoveId {
            from: self.from,
            to: self.to,
            castling: self.castling_side(),
            promotion: self.promotion,
        }
    }
}

/// Key of a legal successor: from/to plus castling kind and promotion piece.
///
/// Ordering is by `from`, then `to`, then castling, then promotion, which
/// keeps iteration over a legal-move map reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveId {
    pub from: Square,
    pub to: Square,
    pub castling: Option<CastlingSide>,
    pub promotion: Option<PieceKind>,
}

const TO_SHIFT: u32 = 6;
const CASTLING_SHIFT: u32 = 12;
const PROMOTION_SHIFT: u32 = 14;
const SQUARE_MASK: u32 = 0x3F;
const NO_PIECE_CODE: u32 = 0x7;

impl MoveId {
    /// Packs the identifier into 17 bits:
    /// `from | to << 6 | castling << 12 | promotion << 14`.
    pub fn to_code(self) -> u32 {
        let castling = match self.castling {
            None => 0,
            Some(CastlingSide::Kingside) => 1,
            Some(CastlingSide::Queenside) => 2,
        };
        let promotion = self
            .promotion
            .map(|piece| piece.index() as u32)
            .unwrap_or(NO_PIECE_CODE);

        u32::from(self.from)
            | u32::from(self.to) << TO_SHIFT
            | castling << CASTLING_SHIFT
            | promotion << PROMOTION_SHIFT
    }

    pub fn from_code(code: u32) -> Option<MoveId> {
        let castling = match (code >> CASTLING_SHIFT) & 0x3 {
            0 => None,
            1 => Some(CastlingSide::Kingside),
            2 => Some(CastlingSide::Queenside),
            _ => return None,
        };
        let promotion = match (code >> PROMOTION_SHIFT) & 0x7 {
            NO_PIECE_CODE => None,
            index => Some(PieceKind::from_index(index as usize)?),
        };

        Some(MoveId {
            from: (code & SQUARE_MASK) as Square,
            to: ((code >> TO_SHIFT) & SQUARE_MASK) as Square,
            castling,
            promotion,
        })
    }
}

/// Long algebraic text: `e2e4`, `e7e8q`; castling is written as the king's
/// two-square move (`e1g1`).
impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter())?;
        }
        Ok(())
    }
}

/// What the ply that produced a `Game` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub castling: Option<CastlingSide>,
    pub promotion: Option<PieceKind>,
    pub en_passant: bool,
}

impl LastMove {
    pub fn from_candidate(mover: Color, candidate: &CandidateMove) -> Self {
        Self {
            piece: Piece::new(mover, candidate.piece),
            from: candidate.from,
            to: candidate.to,
            captured: candidate
                .captured
                .map(|kind| Piece::new(mover.opposite(), kind)),
            castling: candidate.castling_side(),
            promotion: candidate.promotion,
            en_passant: candidate.flag == MoveFlag::EnPassant,
        }
    }
}
