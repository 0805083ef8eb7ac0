use hanabi_engine::config::GameConfig;
use hanabi_engine::errors::GameError;
use hanabi_engine::state::{Actor, GameState};

#[test]
fn default_configuration_is_standard_hanabi() {
    let config = GameConfig::default();
    assert_eq!(config.num_colors, 5);
    assert_eq!(config.num_ranks, 5);
    assert_eq!(config.hand_size(), 5);
    assert_eq!(config.max_score(), 25);
    assert_eq!(config.total_cards(), 50);
    assert_eq!(config.deck_cards().len(), 50);
    assert_eq!(config.card_instances(0), 3);
    assert_eq!(config.card_instances(1), 2);
    assert_eq!(config.card_instances(4), 1);
}

#[test]
fn hand_size_shrinks_for_big_tables() {
    let three = GameConfig {
        num_players: 3,
        ..GameConfig::default()
    };
    assert_eq!(three.hand_size(), 5);
    let four = GameConfig {
        num_players: 4,
        ..GameConfig::default()
    };
    assert_eq!(four.hand_size(), 4);
    let custom = GameConfig {
        num_players: 4,
        hand_size: Some(6),
        ..GameConfig::default()
    };
    assert_eq!(custom.hand_size(), 6);
}

#[test]
fn invalid_configurations_are_rejected() {
    let lonely = GameConfig {
        num_players: 1,
        ..GameConfig::default()
    };
    assert!(matches!(
        GameState::new(lonely, 0),
        Err(GameError::InvalidConfig(_))
    ));
    let rainbow = GameConfig {
        num_colors: 9,
        ..GameConfig::default()
    };
    assert!(matches!(
        GameState::new(rainbow, 0),
        Err(GameError::InvalidConfig(_))
    ));
    let absent = GameConfig {
        start_player: Some(5),
        ..GameConfig::default()
    };
    assert!(matches!(
        GameState::new(absent, 0),
        Err(GameError::InvalidConfig(_))
    ));
}

#[test]
fn fresh_states_start_with_full_resources() {
    let state = GameState::new(GameConfig::default(), 42).expect("valid config");
    assert_eq!(state.information_tokens(), 8);
    assert_eq!(state.life_tokens(), 3);
    assert_eq!(state.deck_size(), 50);
    assert!(state.fireworks().iter().all(|&h| h == 0));
    assert!(state.discard_pile().is_empty());
    assert!(state.hands().iter().all(|h| h.is_empty()));
    assert_eq!(state.cur_player(), Actor::Chance);
    assert!(state.move_history().is_empty());
    assert!(!state.is_terminal());
}

#[test]
fn same_seed_same_game() {
    let mut a = GameState::new(GameConfig::default(), 1).expect("valid config");
    let mut b = GameState::new(GameConfig::default(), 1).expect("valid config");
    for _ in 0..10 {
        let da = a.apply_random_chance().expect("deal");
        let db = b.apply_random_chance().expect("deal");
        assert_eq!(da, db);
    }
    assert_eq!(a.cur_player(), b.cur_player());
}

#[test]
fn cloned_states_evolve_independently() {
    let mut a = GameState::new(GameConfig::default(), 2).expect("valid config");
    let mut b = a.clone();
    a.apply_random_chance().expect("deal");
    assert_eq!(b.deck_size(), 50, "the clone is untouched");
    // the clone replays the same stream from the same point
    b.apply_random_chance().expect("deal");
    assert_eq!(a.move_history(), b.move_history());
}
