//! Cautious rule-based agent.
//!
//! Provides a simple deterministic opponent that can be used for testing
//! and benchmarking. It never risks a life token on a guess.

use hanabi_engine::moves::Move;
use hanabi_engine::state::GameState;

use crate::Agent;

/// Rule-based baseline that spends lives never and tokens carefully.
///
/// # Strategy
///
/// 1. Play a card its own hint knowledge proves playable (color and rank
///    both hinted, or rank hinted while every stack wants that rank).
/// 2. Otherwise hint a teammate an attribute they have not been told yet,
///    oldest card first.
/// 3. Otherwise discard its oldest card to buy a token back.
/// 4. Cornered (tokens full, nothing new to say), repeat a hint rather
///    than play blind.
///
/// Deterministic throughout, so simulations stay reproducible.
#[derive(Debug, Clone, Default)]
pub struct CautiousAgent;

impl CautiousAgent {
    pub fn new() -> Self {
        Self
    }

    /// A play guaranteed to score, or None.
    fn certain_play(state: &GameState, player: usize) -> Option<Move> {
        let fireworks = state.fireworks();
        for (index, knowledge) in state.hand(player).knowledge().iter().enumerate() {
            match (knowledge.hinted_color(), knowledge.hinted_rank()) {
                (Some(color), Some(rank)) => {
                    if state.card_playable_on_fireworks(color, rank) {
                        return Some(Move::Play { index });
                    }
                }
                (None, Some(rank)) => {
                    // Rank alone is enough when every stack is waiting for it.
                    if fireworks.iter().all(|&height| height == rank) {
                        return Some(Move::Play { index });
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// A hint that tells some teammate something new, or None.
    fn informative_hint(state: &GameState, player: usize) -> Option<Move> {
        for target_offset in 1..state.num_players() {
            let target = (player + target_offset) % state.num_players();
            let hand = state.hand(target);
            for (card, knowledge) in hand.cards().iter().zip(hand.knowledge().iter()) {
                if !knowledge.color_hinted() {
                    return Some(Move::RevealColor {
                        target_offset,
                        color: card.color,
                    });
                }
                if !knowledge.rank_hinted() {
                    return Some(Move::RevealRank {
                        target_offset,
                        rank: card.rank,
                    });
                }
            }
        }
        None
    }
}

impl Agent for CautiousAgent {
    fn act(&mut self, state: &GameState, player: usize) -> Move {
        if let Some(mov) = Self::certain_play(state, player) {
            return mov;
        }
        if state.information_tokens() > 0 {
            if let Some(mov) = Self::informative_hint(state, player) {
                return mov;
            }
        }
        if state.information_tokens() < state.config().max_information_tokens
            && !state.hand(player).is_empty()
        {
            return Move::Discard { index: 0 };
        }
        // Tokens are full and every attribute is already hinted: a
        // redundant hint is still cheaper than a blind play.
        let legal = state.legal_moves(player);
        if let Some(mov) = legal
            .iter()
            .find(|m| matches!(m, Move::RevealColor { .. } | Move::RevealRank { .. }))
        {
            return *mov;
        }
        legal
            .first()
            .copied()
            .expect("no legal moves for the acting player")
    }

    fn name(&self) -> &str {
        "CautiousAgent"
    }
}
