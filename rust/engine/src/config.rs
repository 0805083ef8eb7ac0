use serde::{Deserialize, Serialize};

use crate::cards::{Card, COLOR_CHARS};
use crate::errors::GameError;

/// Selects how much a player learns about their own dealt cards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservationType {
    /// Players never see their own cards; knowledge grows only from hints.
    Standard,
    /// Dealt cards arrive with their own color and rank already revealed to
    /// the owner, as if hinted at deal time.
    Seer,
}

/// Parameters of one game instance. Shared read-only between independent
/// simulations; each `GameState` keeps its own copy.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub num_colors: u8,
    pub num_ranks: u8,
    pub num_players: usize,
    /// Overrides the player-count-based hand size when set.
    pub hand_size: Option<usize>,
    pub max_information_tokens: u8,
    pub max_life_tokens: u8,
    pub observation: ObservationType,
    /// First real player to act. `None` samples one at game start from the
    /// state's own seeded stream.
    pub start_player: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_colors: 5,
            num_ranks: 5,
            num_players: 2,
            hand_size: None,
            max_information_tokens: 8,
            max_life_tokens: 3,
            observation: ObservationType::Standard,
            start_player: None,
        }
    }
}

impl GameConfig {
    /// Physical copies of each (color, rank) card: three 1s, one top rank,
    /// two of everything in between.
    pub fn card_instances(&self, rank: u8) -> u32 {
        if rank == 0 {
            3
        } else if rank + 1 == self.num_ranks {
            1
        } else {
            2
        }
    }

    /// Cards held per player: five for 2-3 players, four for 4-5, unless
    /// overridden.
    pub fn hand_size(&self) -> usize {
        self.hand_size
            .unwrap_or(if self.num_players < 4 { 5 } else { 4 })
    }

    pub fn max_score(&self) -> u32 {
        u32::from(self.num_colors) * u32::from(self.num_ranks)
    }

    pub fn total_cards(&self) -> u32 {
        let per_color: u32 = (0..self.num_ranks).map(|r| self.card_instances(r)).sum();
        u32::from(self.num_colors) * per_color
    }

    /// The full physical card list, one entry per instance. Useful for
    /// rebuilding a deck during determinization.
    pub fn deck_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.total_cards() as usize);
        for color in 0..self.num_colors {
            for rank in 0..self.num_ranks {
                for _ in 0..self.card_instances(rank) {
                    cards.push(Card::new(color, rank));
                }
            }
        }
        cards
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_colors == 0 || self.num_colors as usize > COLOR_CHARS.len() {
            return Err(GameError::InvalidConfig(format!(
                "num_colors must be in 1..={}, got {}",
                COLOR_CHARS.len(),
                self.num_colors
            )));
        }
        if self.num_ranks == 0 || self.num_ranks > 5 {
            return Err(GameError::InvalidConfig(format!(
                "num_ranks must be in 1..=5, got {}",
                self.num_ranks
            )));
        }
        if !(2..=5).contains(&self.num_players) {
            return Err(GameError::InvalidConfig(format!(
                "num_players must be in 2..=5, got {}",
                self.num_players
            )));
        }
        // Hands are addressed by u8 bitmasks in hints and history.
        if self.hand_size() == 0 || self.hand_size() > 8 {
            return Err(GameError::InvalidConfig(format!(
                "hand_size must be in 1..=8, got {}",
                self.hand_size()
            )));
        }
        if self.max_information_tokens == 0 {
            return Err(GameError::InvalidConfig(
                "max_information_tokens must be at least 1".into(),
            ));
        }
        if self.max_life_tokens == 0 {
            return Err(GameError::InvalidConfig(
                "max_life_tokens must be at least 1".into(),
            ));
        }
        if self.hand_size() * self.num_players > self.total_cards() as usize {
            return Err(GameError::InvalidConfig(format!(
                "deck of {} cards cannot fill {} hands of {}",
                self.total_cards(),
                self.num_players,
                self.hand_size()
            )));
        }
        if let Some(p) = self.start_player {
            if p >= self.num_players {
                return Err(GameError::InvalidConfig(format!(
                    "start_player {} out of range for {} players",
                    p, self.num_players
                )));
            }
        }
        Ok(())
    }
}
