use serde::{Deserialize, Serialize};

/// Characters used to render color indices, in index order.
/// The engine supports at most this many colors.
pub const COLOR_CHARS: &[u8] = b"RYGWB";

/// Represents a single Hanabi card: a color index and a rank index.
/// Ranks are zero-based internally; rank 0 is the card displayed as "1".
/// Cards are the fundamental unit of the game, held in hands, stacked on
/// fireworks, piled in the discard, and counted in the deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// Color index in `[0, num_colors)`
    pub color: u8,
    /// Rank index in `[0, num_ranks)`
    pub rank: u8,
}

impl Card {
    pub fn new(color: u8, rank: u8) -> Self {
        Self { color, rank }
    }
}

pub fn color_char(color: u8) -> char {
    match COLOR_CHARS.get(color as usize) {
        Some(&c) => c as char,
        None => '?',
    }
}

/// Ranks render one-based, matching the printed cards.
pub fn rank_char(rank: u8) -> char {
    match rank {
        0..=8 => (b'1' + rank) as char,
        _ => '?',
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", color_char(self.color), rank_char(self.rank))
    }
}
