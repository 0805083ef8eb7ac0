use crate::cards::{color_char, rank_char, Card};

/// Everything a card's owner could infer about it from hints alone: which
/// colors and ranks are still possible, and whether the color or rank was
/// ever named directly. A possibility, once eliminated, never comes back.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CardKnowledge {
    hinted_color: Option<u8>,
    hinted_rank: Option<u8>,
    color_plausible: Vec<bool>,
    rank_plausible: Vec<bool>,
}

impl CardKnowledge {
    pub fn new(num_colors: u8, num_ranks: u8) -> Self {
        Self {
            hinted_color: None,
            hinted_rank: None,
            color_plausible: vec![true; num_colors as usize],
            rank_plausible: vec![true; num_ranks as usize],
        }
    }

    /// The directly hinted color, if any.
    pub fn hinted_color(&self) -> Option<u8> {
        self.hinted_color
    }

    pub fn color_hinted(&self) -> bool {
        self.hinted_color.is_some()
    }

    pub fn color_plausible(&self, color: u8) -> bool {
        self.color_plausible
            .get(color as usize)
            .copied()
            .unwrap_or(false)
    }

    /// The directly hinted rank, if any.
    pub fn hinted_rank(&self) -> Option<u8> {
        self.hinted_rank
    }

    pub fn rank_hinted(&self) -> bool {
        self.hinted_rank.is_some()
    }

    pub fn rank_plausible(&self, rank: u8) -> bool {
        self.rank_plausible
            .get(rank as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Record that this card's color was named in a hint. Eliminates every
    /// other color.
    pub fn apply_is_color_hint(&mut self, color: u8) {
        self.hinted_color = Some(color);
        for (c, plausible) in self.color_plausible.iter_mut().enumerate() {
            *plausible = c == color as usize;
        }
    }

    /// Record that a hint for `color` did not match this card.
    pub fn apply_is_not_color_hint(&mut self, color: u8) {
        self.color_plausible[color as usize] = false;
    }

    pub fn apply_is_rank_hint(&mut self, rank: u8) {
        self.hinted_rank = Some(rank);
        for (r, plausible) in self.rank_plausible.iter_mut().enumerate() {
            *plausible = r == rank as usize;
        }
    }

    pub fn apply_is_not_rank_hint(&mut self, rank: u8) {
        self.rank_plausible[rank as usize] = false;
    }
}

impl std::fmt::Display for CardKnowledge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.hinted_color {
            Some(c) => write!(f, "{}", color_char(c))?,
            None => write!(f, "X")?,
        }
        match self.hinted_rank {
            Some(r) => write!(f, "{}", rank_char(r))?,
            None => write!(f, "X")?,
        }
        write!(f, "|")?;
        for (c, &plausible) in self.color_plausible.iter().enumerate() {
            if plausible {
                write!(f, "{}", color_char(c as u8))?;
            }
        }
        for (r, &plausible) in self.rank_plausible.iter().enumerate() {
            if plausible {
                write!(f, "{}", rank_char(r as u8))?;
            }
        }
        Ok(())
    }
}

/// One player's cards, oldest first, with a knowledge record per card.
/// Removal compacts the sequence, so index 0 is always the oldest card
/// still held.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    knowledge: Vec<CardKnowledge>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn knowledge(&self) -> &[CardKnowledge] {
        &self.knowledge
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: Card, knowledge: CardKnowledge) {
        self.cards.push(card);
        self.knowledge.push(knowledge);
    }

    /// Removes the card at `index`, appending it to `discard_pile` when one
    /// is given (omitted for successfully played cards). The knowledge
    /// record dies with the card.
    pub fn remove_at(&mut self, index: usize, discard_pile: Option<&mut Vec<Card>>) -> Card {
        let card = self.cards.remove(index);
        self.knowledge.remove(index);
        if let Some(pile) = discard_pile {
            pile.push(card);
        }
        card
    }

    /// Overwrites a held card and its knowledge in place. State-editing
    /// support; normal play never rewrites a card.
    pub fn replace_at(&mut self, index: usize, card: Card, knowledge: CardKnowledge) {
        self.cards[index] = card;
        self.knowledge[index] = knowledge;
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.knowledge.clear();
    }

    /// Bitmask of positions holding the given color.
    pub fn color_bitmask(&self, color: u8) -> u8 {
        debug_assert!(self.cards.len() <= 8);
        let mut mask = 0u8;
        for (i, card) in self.cards.iter().enumerate() {
            if card.color == color {
                mask |= 1 << i;
            }
        }
        mask
    }

    /// Bitmask of positions holding the given rank.
    pub fn rank_bitmask(&self, rank: u8) -> u8 {
        debug_assert!(self.cards.len() <= 8);
        let mut mask = 0u8;
        for (i, card) in self.cards.iter().enumerate() {
            if card.rank == rank {
                mask |= 1 << i;
            }
        }
        mask
    }

    /// Applies a color hint to every card in the hand: matches learn their
    /// color, non-matches lose the color as a possibility. Returns a
    /// bitmask of positions that learned something new.
    pub fn reveal_color(&mut self, color: u8) -> u8 {
        debug_assert!(self.cards.len() <= 8);
        let mut mask = 0u8;
        for (i, card) in self.cards.iter().enumerate() {
            let knowledge = &mut self.knowledge[i];
            if card.color == color {
                if !knowledge.color_hinted() {
                    mask |= 1 << i;
                }
                knowledge.apply_is_color_hint(color);
            } else {
                if knowledge.color_plausible(color) {
                    mask |= 1 << i;
                }
                knowledge.apply_is_not_color_hint(color);
            }
        }
        mask
    }

    /// Rank counterpart of [`Hand::reveal_color`].
    pub fn reveal_rank(&mut self, rank: u8) -> u8 {
        debug_assert!(self.cards.len() <= 8);
        let mut mask = 0u8;
        for (i, card) in self.cards.iter().enumerate() {
            let knowledge = &mut self.knowledge[i];
            if card.rank == rank {
                if !knowledge.rank_hinted() {
                    mask |= 1 << i;
                }
                knowledge.apply_is_rank_hint(rank);
            } else {
                if knowledge.rank_plausible(rank) {
                    mask |= 1 << i;
                }
                knowledge.apply_is_not_rank_hint(rank);
            }
        }
        mask
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (card, knowledge) in self.cards.iter().zip(self.knowledge.iter()) {
            writeln!(f, "{} || {}", card, knowledge)?;
        }
        Ok(())
    }
}
