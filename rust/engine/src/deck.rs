use rand::Rng;

use crate::cards::Card;
use crate::config::GameConfig;

/// The undrawn cards, kept as a count per (color, rank) rather than an
/// ordered sequence. Drawing is weighted by the remaining counts, so a
/// deck never commits to a shuffle order; this is what lets determinization
/// code resample unseen cards cheaply.
#[derive(Debug, Clone)]
pub struct Deck {
    counts: Vec<u32>,
    total: u32,
    num_ranks: u8,
}

impl Deck {
    /// A full deck for the given configuration.
    pub fn new(config: &GameConfig) -> Self {
        let mut deck = Self {
            counts: vec![0; config.num_colors as usize * config.num_ranks as usize],
            total: 0,
            num_ranks: config.num_ranks,
        };
        for color in 0..config.num_colors {
            for rank in 0..config.num_ranks {
                let count = config.card_instances(rank);
                let index = deck.index(color, rank);
                deck.counts[index] = count;
                deck.total += count;
            }
        }
        deck
    }

    fn index(&self, color: u8, rank: u8) -> usize {
        color as usize * self.num_ranks as usize + rank as usize
    }

    fn card_at(&self, index: usize) -> Card {
        Card::new(
            (index / self.num_ranks as usize) as u8,
            (index % self.num_ranks as usize) as u8,
        )
    }

    pub fn card_count(&self, color: u8, rank: u8) -> u32 {
        self.counts[self.index(color, rank)]
    }

    pub fn len(&self) -> usize {
        self.total as usize
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterates the distinct cards still in the deck with their counts.
    pub fn cells(&self) -> impl Iterator<Item = (Card, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(i, &count)| (self.card_at(i), count))
    }

    /// Picks a card with probability proportional to its remaining count,
    /// without removing it. `None` on an empty deck.
    pub fn sample(&self, rng: &mut impl Rng) -> Option<Card> {
        if self.total == 0 {
            return None;
        }
        let mut remaining = rng.random_range(0..self.total);
        for (i, &count) in self.counts.iter().enumerate() {
            if remaining < count {
                return Some(self.card_at(i));
            }
            remaining -= count;
        }
        unreachable!("total is kept equal to the sum of counts");
    }

    /// Weighted random draw. `None` on an empty deck.
    pub fn deal_random(&mut self, rng: &mut impl Rng) -> Option<Card> {
        let card = self.sample(rng)?;
        self.deal_exact(card.color, card.rank)
    }

    /// Draws a specific card. `None` when no copies remain.
    pub fn deal_exact(&mut self, color: u8, rank: u8) -> Option<Card> {
        let index = self.index(color, rank);
        if self.counts[index] == 0 {
            return None;
        }
        self.counts[index] -= 1;
        self.total -= 1;
        Some(Card::new(color, rank))
    }

    /// Puts a card back. Only state-editing paths call this; normal play
    /// never replenishes the deck.
    pub fn return_card(&mut self, color: u8, rank: u8) {
        let index = self.index(color, rank);
        self.counts[index] += 1;
        self.total += 1;
    }

    /// Rebuilds the counts from an explicit card list, for determinization
    /// and resampling scenarios.
    pub fn set_content(&mut self, cards: &[Card]) {
        self.counts.fill(0);
        self.total = 0;
        for card in cards {
            let index = self.index(card.color, card.rank);
            self.counts[index] += 1;
            self.total += 1;
        }
    }
}
