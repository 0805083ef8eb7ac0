//! # hanabi-ai: Agents for the Hanabi Engine
//!
//! The driver side of the engine: a common decision-making interface, two
//! reference agents, and a loop that plays a full game, sampling the
//! engine's chance outcomes between player turns.
//!
//! ## Core Components
//!
//! - [`Agent`] - Trait defining the interface for agent decision-making
//! - [`random`] - Uniform-random legal play, for rollouts and baselines
//! - [`baseline`] - A cautious rule-based agent
//! - [`create_agent`] - Factory function for creating agents
//! - [`play_game`] - Drive one game from deal to terminal state
//!
//! ## Quick Start
//!
//! ```rust
//! use hanabi_ai::{create_agent, play_game};
//! use hanabi_engine::config::GameConfig;
//!
//! let mut agents = vec![create_agent("random", 1), create_agent("cautious", 2)];
//! let state = play_game(GameConfig::default(), 42, &mut agents).unwrap();
//! assert!(state.is_terminal());
//! assert!(state.score() <= state.config().max_score());
//! ```
//!
//! ## Example Implementation
//!
//! ```rust
//! use hanabi_ai::Agent;
//! use hanabi_engine::moves::Move;
//! use hanabi_engine::state::GameState;
//!
//! struct FirstLegal;
//!
//! impl Agent for FirstLegal {
//!     fn act(&mut self, state: &GameState, player: usize) -> Move {
//!         state.legal_moves(player).remove(0)
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FirstLegal"
//!     }
//! }
//! ```

use hanabi_engine::config::GameConfig;
use hanabi_engine::errors::GameError;
use hanabi_engine::moves::Move;
use hanabi_engine::state::{Actor, GameState};

pub mod baseline;
pub mod random;

/// Interface for Hanabi agents. An agent is asked for a move only on its
/// own turn and must return one that is legal in the given state; the
/// engine rejects anything else.
pub trait Agent: Send + Sync {
    /// Choose a move for `player` in the given state.
    ///
    /// Takes `&mut self` so agents can own internal state such as a seeded
    /// random stream.
    fn act(&mut self, state: &GameState, player: usize) -> Move;

    /// Return the name/identifier of this agent implementation.
    fn name(&self) -> &str;
}

/// Factory function to create agents by type string.
///
/// # Supported agent types
///
/// - `"random"` - uniform choice over the legal moves
/// - `"cautious"` - rule-based: certain plays, then hints, then discards
///
/// # Panics
///
/// Panics if an unknown agent type is requested.
pub fn create_agent(kind: &str, seed: u64) -> Box<dyn Agent> {
    match kind {
        "random" => Box::new(random::RandomAgent::new(seed)),
        "cautious" => Box::new(baseline::CautiousAgent::new()),
        _ => panic!("Unknown agent type: {}", kind),
    }
}

/// Plays one game to its terminal state: chance turns are sampled through
/// the engine's own weighted draw, player turns are delegated to the
/// agent seated at that position. Returns the final state.
pub fn play_game(
    config: GameConfig,
    seed: u64,
    agents: &mut [Box<dyn Agent>],
) -> Result<GameState, GameError> {
    if agents.len() != config.num_players {
        return Err(GameError::InvalidConfig(format!(
            "{} agents for {} players",
            agents.len(),
            config.num_players
        )));
    }
    let mut state = GameState::new(config, seed)?;
    while !state.is_terminal() {
        match state.cur_player() {
            Actor::Chance => {
                state.apply_random_chance()?;
            }
            Actor::Player(p) => {
                let mov = agents[p].act(&state, p);
                state.apply_move(mov)?;
            }
        }
    }
    Ok(state)
}
