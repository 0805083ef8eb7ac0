use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{color_char, Card};
use crate::config::{GameConfig, ObservationType};
use crate::deck::Deck;
use crate::edit::StateEditor;
use crate::errors::GameError;
use crate::hand::{CardKnowledge, Hand};
use crate::history::HistoryItem;
use crate::moves::Move;

/// Whose turn it is. Dealing is modeled as a pseudo-player so that drivers
/// can treat chance nodes and decision nodes uniformly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// A card must be dealt before any real player acts.
    Chance,
    /// The real player at this seat acts.
    Player(usize),
}

/// Terminal classification of a state. Checked in declaration order:
/// losing the last life forfeits the game even if the deck also ran out.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum EndOfGameStatus {
    NotFinished,
    OutOfLifeTokens,
    OutOfCards,
    CompletedFireworks,
}

/// The complete mutable state of one Hanabi game: deck, hands, discard
/// pile, fireworks, token counters, turn order, and the move history log.
/// All mutation goes through [`GameState::apply_move`] (or the segregated
/// state-editing surface behind [`GameState::edit`]), and every effect of a
/// move commits atomically before the call returns.
///
/// A state owns its random stream, seeded at construction, so independent
/// simulations stay reproducible and never contend on a shared generator.
/// Cloning a state clones the stream along with everything else.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) deck: Deck,
    pub(crate) hands: Vec<Hand>,
    pub(crate) discard_pile: Vec<Card>,
    pub(crate) fireworks: Vec<u8>,
    pub(crate) information_tokens: u8,
    pub(crate) life_tokens: u8,
    pub(crate) cur_player: Actor,
    pub(crate) next_non_chance_player: usize,
    pub(crate) turns_to_play: i32,
    pub(crate) history: Vec<HistoryItem>,
    pub(crate) rng: ChaCha20Rng,
}

impl GameState {
    /// A fresh game in the initial deal phase: full deck, empty hands, all
    /// tokens, chance to act.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let start_player = match config.start_player {
            Some(p) => p,
            None => rng.random_range(0..config.num_players),
        };
        Ok(Self {
            deck: Deck::new(&config),
            hands: vec![Hand::new(); config.num_players],
            discard_pile: Vec::new(),
            fireworks: vec![0; config.num_colors as usize],
            information_tokens: config.max_information_tokens,
            life_tokens: config.max_life_tokens,
            cur_player: Actor::Chance,
            next_non_chance_player: start_player,
            turns_to_play: config.num_players as i32,
            history: Vec::new(),
            rng,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn num_players(&self) -> usize {
        self.config.num_players
    }
    pub fn cur_player(&self) -> Actor {
        self.cur_player
    }
    pub fn information_tokens(&self) -> u8 {
        self.information_tokens
    }
    pub fn life_tokens(&self) -> u8 {
        self.life_tokens
    }
    pub fn fireworks(&self) -> &[u8] {
        &self.fireworks
    }
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }
    pub fn hand(&self, player: usize) -> &Hand {
        &self.hands[player]
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }
    pub fn move_history(&self) -> &[HistoryItem] {
        &self.history
    }

    /// The state-editing surface for determinization and resampling.
    /// Everything behind it bypasses move legality.
    pub fn edit(&mut self) -> StateEditor<'_> {
        StateEditor::new(self)
    }

    /// True iff the card would extend its color's firework stack.
    pub fn card_playable_on_fireworks(&self, color: u8, rank: u8) -> bool {
        if color >= self.config.num_colors {
            return false;
        }
        rank == self.fireworks[color as usize]
    }

    /// Pure legality predicate; never fails, never mutates.
    pub fn move_is_legal(&self, mov: Move) -> bool {
        match mov {
            Move::Deal { color, rank } => {
                self.cur_player == Actor::Chance
                    && color < self.config.num_colors
                    && rank < self.config.num_ranks
                    && self.deck.card_count(color, rank) > 0
            }
            Move::Discard { index } => match self.cur_player {
                // Discarding at the token cap is illegal: the rules reward
                // restraint.
                Actor::Player(p) => {
                    self.information_tokens < self.config.max_information_tokens
                        && index < self.hands[p].len()
                }
                Actor::Chance => false,
            },
            Move::Play { index } => match self.cur_player {
                Actor::Player(p) => index < self.hands[p].len(),
                Actor::Chance => false,
            },
            Move::RevealColor {
                target_offset,
                color,
            } => {
                let player = match self.cur_player {
                    Actor::Player(p) => p,
                    Actor::Chance => return false,
                };
                if !self.hinting_is_legal(target_offset) || color >= self.config.num_colors {
                    return false;
                }
                let target = (player + target_offset) % self.config.num_players;
                self.hands[target].cards().iter().any(|c| c.color == color)
            }
            Move::RevealRank {
                target_offset,
                rank,
            } => {
                let player = match self.cur_player {
                    Actor::Player(p) => p,
                    Actor::Chance => return false,
                };
                if !self.hinting_is_legal(target_offset) || rank >= self.config.num_ranks {
                    return false;
                }
                let target = (player + target_offset) % self.config.num_players;
                self.hands[target].cards().iter().any(|c| c.rank == rank)
            }
        }
    }

    fn hinting_is_legal(&self, target_offset: usize) -> bool {
        self.information_tokens > 0 && (1..self.config.num_players).contains(&target_offset)
    }

    /// Legal moves for a real player. Empty for everyone but the current
    /// actor (strictly turn-based); chance turns are enumerated by
    /// [`GameState::chance_outcomes`] instead. Order is stable: discards,
    /// plays, color hints by offset, rank hints by offset.
    pub fn legal_moves(&self, player: usize) -> Vec<Move> {
        if self.cur_player != Actor::Player(player) {
            return Vec::new();
        }
        let hand_len = self.hands[player].len();
        let mut moves = Vec::new();
        for index in 0..hand_len {
            moves.push(Move::Discard { index });
        }
        for index in 0..hand_len {
            moves.push(Move::Play { index });
        }
        for target_offset in 1..self.config.num_players {
            for color in 0..self.config.num_colors {
                moves.push(Move::RevealColor {
                    target_offset,
                    color,
                });
            }
        }
        for target_offset in 1..self.config.num_players {
            for rank in 0..self.config.num_ranks {
                moves.push(Move::RevealRank {
                    target_offset,
                    rank,
                });
            }
        }
        moves.retain(|m| self.move_is_legal(*m));
        moves
    }

    /// Every dealable card with its draw probability. Empty on non-chance
    /// turns and on an empty deck; otherwise the probabilities sum to 1.
    pub fn chance_outcomes(&self) -> (Vec<Move>, Vec<f64>) {
        if self.cur_player != Actor::Chance {
            return (Vec::new(), Vec::new());
        }
        let total = self.deck.len() as f64;
        let mut moves = Vec::new();
        let mut probs = Vec::new();
        for (card, count) in self.deck.cells() {
            moves.push(Move::Deal {
                color: card.color,
                rank: card.rank,
            });
            probs.push(f64::from(count) / total);
        }
        (moves, probs)
    }

    pub fn chance_outcome_prob(&self, mov: Move) -> f64 {
        match mov {
            Move::Deal { color, rank } if !self.deck.is_empty() => {
                f64::from(self.deck.card_count(color, rank)) / self.deck.len() as f64
            }
            _ => 0.0,
        }
    }

    /// Applies a currently-legal move, mutating deck, hands, tokens,
    /// fireworks, and turn order together and appending a history record.
    /// An illegal move is a caller bug: it is rejected loudly with nothing
    /// applied.
    pub fn apply_move(&mut self, mov: Move) -> Result<(), GameError> {
        if !self.move_is_legal(mov) {
            return Err(GameError::IllegalMove(mov));
        }
        // The endgame countdown runs from the moment the deck empties,
        // giving every player exactly one more turn.
        if self.deck.is_empty() {
            self.turns_to_play -= 1;
        }
        let mut item = HistoryItem::new(mov, self.cur_player);
        match mov {
            Move::Deal { color, rank } => {
                let target = self
                    .player_to_deal()
                    .expect("a deal is only legal while some hand is short");
                let mut knowledge =
                    CardKnowledge::new(self.config.num_colors, self.config.num_ranks);
                if self.config.observation == ObservationType::Seer {
                    knowledge.apply_is_color_hint(color);
                    knowledge.apply_is_rank_hint(rank);
                }
                let card = self
                    .deck
                    .deal_exact(color, rank)
                    .expect("a deal is only legal while copies remain");
                self.hands[target].add_card(card, knowledge);
                item.deal_to = Some(target);
            }
            Move::Discard { index } => {
                let player = self.acting_player();
                item.information_token = self.increment_information_tokens();
                item.card = Some(self.hands[player].cards()[index]);
                self.hands[player].remove_at(index, Some(&mut self.discard_pile));
            }
            Move::Play { index } => {
                let player = self.acting_player();
                let card = self.hands[player].cards()[index];
                let (scored, bonus) = self.add_to_fireworks(card);
                item.card = Some(card);
                item.scored = scored;
                item.information_token = bonus;
                let sink = if scored {
                    None
                } else {
                    Some(&mut self.discard_pile)
                };
                self.hands[player].remove_at(index, sink);
            }
            Move::RevealColor {
                target_offset,
                color,
            } => {
                self.decrement_information_tokens();
                let target = (self.acting_player() + target_offset) % self.config.num_players;
                let hand = &mut self.hands[target];
                item.reveal_bitmask = hand.color_bitmask(color);
                item.newly_revealed_bitmask = hand.reveal_color(color);
            }
            Move::RevealRank {
                target_offset,
                rank,
            } => {
                self.decrement_information_tokens();
                let target = (self.acting_player() + target_offset) % self.config.num_players;
                let hand = &mut self.hands[target];
                item.reveal_bitmask = hand.rank_bitmask(rank);
                item.newly_revealed_bitmask = hand.reveal_rank(rank);
            }
        }
        self.history.push(item);
        self.advance_to_next_player();
        Ok(())
    }

    /// Samples a deal weighted by the remaining counts and applies it.
    /// Convenience for drivers that do not supply their own chance policy.
    pub fn apply_random_chance(&mut self) -> Result<Move, GameError> {
        let card = self
            .deck
            .sample(&mut self.rng)
            .ok_or(GameError::EmptyDeck)?;
        let mov = Move::Deal {
            color: card.color,
            rank: card.rank,
        };
        self.apply_move(mov)?;
        Ok(mov)
    }

    /// 0 once the last life is gone, otherwise the firework sum.
    pub fn score(&self) -> u32 {
        if self.life_tokens == 0 {
            return 0;
        }
        self.fireworks.iter().map(|&h| u32::from(h)).sum()
    }

    pub fn end_of_game_status(&self) -> EndOfGameStatus {
        if self.life_tokens == 0 {
            return EndOfGameStatus::OutOfLifeTokens;
        }
        if self.score() >= self.config.max_score() {
            return EndOfGameStatus::CompletedFireworks;
        }
        if self.turns_to_play <= 0 {
            return EndOfGameStatus::OutOfCards;
        }
        EndOfGameStatus::NotFinished
    }

    pub fn is_terminal(&self) -> bool {
        self.end_of_game_status() != EndOfGameStatus::NotFinished
    }

    /// The lowest-index player whose hand is short. Deal order is fixed.
    fn player_to_deal(&self) -> Option<usize> {
        let hand_size = self.config.hand_size();
        self.hands.iter().position(|h| h.len() < hand_size)
    }

    fn acting_player(&self) -> usize {
        match self.cur_player {
            Actor::Player(p) => p,
            Actor::Chance => unreachable!("move legality already ruled out chance turns"),
        }
    }

    fn advance_to_next_player(&mut self) {
        if !self.deck.is_empty() && self.player_to_deal().is_some() {
            self.cur_player = Actor::Chance;
        } else {
            self.cur_player = Actor::Player(self.next_non_chance_player);
            self.next_non_chance_player =
                (self.next_non_chance_player + 1) % self.config.num_players;
        }
    }

    fn increment_information_tokens(&mut self) -> bool {
        if self.information_tokens < self.config.max_information_tokens {
            self.information_tokens += 1;
            true
        } else {
            false
        }
    }

    fn decrement_information_tokens(&mut self) {
        assert!(self.information_tokens > 0);
        self.information_tokens -= 1;
    }

    fn decrement_life_tokens(&mut self) {
        assert!(self.life_tokens > 0);
        self.life_tokens -= 1;
    }

    /// Plays the card onto its stack if it fits, otherwise burns a life.
    /// Returns (scored, bonus information token granted).
    fn add_to_fireworks(&mut self, card: Card) -> (bool, bool) {
        if self.card_playable_on_fireworks(card.color, card.rank) {
            self.fireworks[card.color as usize] += 1;
            if self.fireworks[card.color as usize] == self.config.num_ranks {
                return (true, self.increment_information_tokens());
            }
            (true, false)
        } else {
            self.decrement_life_tokens();
            (false, false)
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Life tokens: {}", self.life_tokens)?;
        writeln!(f, "Info tokens: {}", self.information_tokens)?;
        write!(f, "Fireworks: ")?;
        for (color, &height) in self.fireworks.iter().enumerate() {
            write!(f, "{}{} ", color_char(color as u8), height)?;
        }
        writeln!(f)?;
        writeln!(f, "Hands:")?;
        for (i, hand) in self.hands.iter().enumerate() {
            if i > 0 {
                writeln!(f, "-----")?;
            }
            if self.cur_player == Actor::Player(i) {
                writeln!(f, "Cur player")?;
            }
            write!(f, "{}", hand)?;
        }
        writeln!(f, "Deck size: {}", self.deck.len())?;
        write!(f, "Discards:")?;
        for card in &self.discard_pile {
            write!(f, " {}", card)?;
        }
        Ok(())
    }
}
