use serde::{Deserialize, Serialize};

use crate::cards::{color_char, rank_char};

/// One action in the game, including the chance pseudo-player's deals.
/// Hint targets are offsets relative to the acting player (1 is the next
/// player in rotation), never absolute seats.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Chance deals the named card to the neediest hand.
    Deal { color: u8, rank: u8 },
    /// Discard the card at `index`, regaining an information token.
    Discard { index: usize },
    /// Play the card at `index` onto its firework stack.
    Play { index: usize },
    /// Tell the player `target_offset` seats away which of their cards are
    /// of this color.
    RevealColor { target_offset: usize, color: u8 },
    /// Tell the player `target_offset` seats away which of their cards are
    /// of this rank.
    RevealRank { target_offset: usize, rank: u8 },
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Move::Deal { color, rank } => {
                write!(f, "(Deal {}{})", color_char(color), rank_char(rank))
            }
            Move::Discard { index } => write!(f, "(Discard {})", index),
            Move::Play { index } => write!(f, "(Play {})", index),
            Move::RevealColor {
                target_offset,
                color,
            } => write!(f, "(Reveal player +{} color {})", target_offset, color_char(color)),
            Move::RevealRank {
                target_offset,
                rank,
            } => write!(f, "(Reveal player +{} rank {})", target_offset, rank_char(rank)),
        }
    }
}
