//! Uniform-random legal play. The standard rollout policy for search
//! drivers, and the yardstick other agents are measured against.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hanabi_engine::moves::Move;
use hanabi_engine::state::GameState;

use crate::Agent;

/// Picks uniformly among the legal moves, from its own seeded stream.
#[derive(Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, state: &GameState, player: usize) -> Move {
        let moves = state.legal_moves(player);
        assert!(!moves.is_empty(), "no legal moves for the acting player");
        moves[self.rng.random_range(0..moves.len())]
    }

    fn name(&self) -> &str {
        "RandomAgent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanabi_engine::config::GameConfig;
    use hanabi_engine::state::Actor;

    fn dealt_state(seed: u64) -> GameState {
        let config = GameConfig {
            start_player: Some(0),
            ..GameConfig::default()
        };
        let mut state = GameState::new(config, seed).expect("valid config");
        while state.cur_player() == Actor::Chance {
            state.apply_random_chance().expect("deal");
        }
        state
    }

    #[test]
    fn test_random_agent_returns_legal_move() {
        let mut agent = RandomAgent::new(7);
        let state = dealt_state(11);
        let mov = agent.act(&state, 0);
        assert!(state.move_is_legal(mov));
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let state = dealt_state(3);
        let mut a = RandomAgent::new(99);
        let mut b = RandomAgent::new(99);
        assert_eq!(a.act(&state, 0), b.act(&state, 0));
    }

    #[test]
    fn test_random_game_reaches_terminal_state() {
        let mut agents: Vec<Box<dyn Agent>> =
            vec![Box::new(RandomAgent::new(1)), Box::new(RandomAgent::new(2))];
        let state = crate::play_game(GameConfig::default(), 5, &mut agents).expect("game runs");
        assert!(state.is_terminal());
        assert!(state.score() <= state.config().max_score());
    }
}
