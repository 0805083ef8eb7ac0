use thiserror::Error;

use crate::cards::Card;
use crate::moves::Move;

/// Failures surfaced by the engine. Every variant is a caller error: game
/// rules themselves are expressed through `GameState::move_is_legal`, which
/// only ever returns `false`, never an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("move {0} is not legal in the current state")]
    IllegalMove(Move),
    #[error("deck is empty")]
    EmptyDeck,
    #[error("card index {index} out of bounds for hand of {len}")]
    CardIndexOutOfBounds { index: usize, len: usize },
    #[error("no such player: {0}")]
    NoSuchPlayer(usize),
    #[error("card {0} is not available in the deck")]
    CardUnavailable(Card),
    #[error("fireworks vector length {got}, expected {expected}")]
    FireworksLengthMismatch { got: usize, expected: usize },
    #[error("hand of {got} cards exceeds the hand size of {max}")]
    HandTooLarge { got: usize, max: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
