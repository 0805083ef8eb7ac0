use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::CardKnowledge;
use crate::state::{Actor, GameState};

/// Direct write access to a [`GameState`] for determinization and
/// resampling. Obtained through [`GameState::edit`], so call sites that
/// bypass move legality are visibly distinct from legal play.
///
/// Structural mistakes (bad indices, mismatched lengths, a replacement
/// card the deck cannot supply) are rejected; beyond that, the caller is
/// responsible for leaving the state consistent.
pub struct StateEditor<'a> {
    state: &'a mut GameState,
}

impl<'a> StateEditor<'a> {
    pub(crate) fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn set_life_tokens(&mut self, life_tokens: u8) {
        self.state.life_tokens = life_tokens;
    }

    pub fn set_information_tokens(&mut self, information_tokens: u8) {
        self.state.information_tokens = information_tokens;
    }

    pub fn set_fireworks(&mut self, fireworks: Vec<u8>) -> Result<(), GameError> {
        if fireworks.len() != self.state.fireworks.len() {
            return Err(GameError::FireworksLengthMismatch {
                got: fireworks.len(),
                expected: self.state.fireworks.len(),
            });
        }
        self.state.fireworks = fireworks;
        Ok(())
    }

    pub fn set_discard_pile(&mut self, discard_pile: Vec<Card>) {
        self.state.discard_pile = discard_pile;
    }

    pub fn set_cur_player(&mut self, actor: Actor) -> Result<(), GameError> {
        if let Actor::Player(p) = actor {
            if p >= self.state.config.num_players {
                return Err(GameError::NoSuchPlayer(p));
            }
        }
        self.state.cur_player = actor;
        Ok(())
    }

    /// Replaces a player's entire hand. Knowledge is re-initialized blank
    /// for every card; the deck is not touched.
    pub fn set_hand(&mut self, player: usize, cards: Vec<Card>) -> Result<(), GameError> {
        if player >= self.state.config.num_players {
            return Err(GameError::NoSuchPlayer(player));
        }
        if cards.len() > self.state.config.hand_size() {
            return Err(GameError::HandTooLarge {
                got: cards.len(),
                max: self.state.config.hand_size(),
            });
        }
        let num_colors = self.state.config.num_colors;
        let num_ranks = self.state.config.num_ranks;
        let hand = &mut self.state.hands[player];
        hand.clear();
        for card in cards {
            hand.add_card(card, CardKnowledge::new(num_colors, num_ranks));
        }
        Ok(())
    }

    /// Rebuilds the deck counts from an explicit card list.
    pub fn set_deck(&mut self, cards: &[Card]) {
        self.state.deck.set_content(cards);
    }

    /// Swaps one held card for another, rebalancing the deck: the old card
    /// goes back to the stock and the new one is drawn from it. Rejected
    /// when the requested card has no copies left (and is not the card
    /// being replaced), leaving the state untouched; knowledge for the
    /// position is re-initialized blank.
    pub fn set_hand_card(
        &mut self,
        player: usize,
        card_index: usize,
        card: Card,
    ) -> Result<(), GameError> {
        if player >= self.state.config.num_players {
            return Err(GameError::NoSuchPlayer(player));
        }
        let hand_len = self.state.hands[player].len();
        if card_index >= hand_len {
            return Err(GameError::CardIndexOutOfBounds {
                index: card_index,
                len: hand_len,
            });
        }
        if card.color >= self.state.config.num_colors || card.rank >= self.state.config.num_ranks {
            return Err(GameError::CardUnavailable(card));
        }
        let old_card = self.state.hands[player].cards()[card_index];
        if old_card != card && self.state.deck.card_count(card.color, card.rank) == 0 {
            return Err(GameError::CardUnavailable(card));
        }
        if old_card != card {
            self.state.deck.return_card(old_card.color, old_card.rank);
            self.state
                .deck
                .deal_exact(card.color, card.rank)
                .expect("availability was checked above");
        }
        let knowledge =
            CardKnowledge::new(self.state.config.num_colors, self.state.config.num_ranks);
        self.state.hands[player].replace_at(card_index, card, knowledge);
        Ok(())
    }
}
