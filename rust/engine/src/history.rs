use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::moves::Move;
use crate::state::Actor;

/// Record of one applied move and everything it did, appended to the
/// state's history log. Replay and audit only: the engine never reads its
/// own history to decide legality.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// The move as it was applied.
    pub mov: Move,
    /// Who acted (the chance pseudo-player for deals).
    pub actor: Actor,
    /// For deals, the player who received the card.
    #[serde(default)]
    pub deal_to: Option<usize>,
    /// For plays and discards, the true identity of the card that left the
    /// hand.
    #[serde(default)]
    pub card: Option<Card>,
    /// Whether a play advanced its firework stack.
    #[serde(default)]
    pub scored: bool,
    /// Whether the move generated an information token (discard, or a play
    /// that completed a stack below the token cap).
    #[serde(default)]
    pub information_token: bool,
    /// For hints, the hand positions that matched the hint.
    #[serde(default)]
    pub reveal_bitmask: u8,
    /// For hints, the positions whose knowledge actually changed.
    #[serde(default)]
    pub newly_revealed_bitmask: u8,
}

impl HistoryItem {
    pub fn new(mov: Move, actor: Actor) -> Self {
        Self {
            mov,
            actor,
            deal_to: None,
            card: None,
            scored: false,
            information_token: false,
            reveal_bitmask: 0,
            newly_revealed_bitmask: 0,
        }
    }
}
