use hanabi_engine::cards::Card;
use hanabi_engine::config::GameConfig;
use hanabi_engine::errors::GameError;
use hanabi_engine::moves::Move;
use hanabi_engine::state::{Actor, GameState};

fn dealt(seed: u64) -> GameState {
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
fn discarding_at_full_tokens_is_illegal() {
    let state = dealt(1);
    assert_eq!(state.information_tokens(), 8);
    assert!(!state.move_is_legal(Move::Discard { index: 0 }));
    assert!(state
        .legal_moves(0)
        .iter()
        .all(|m| !matches!(m, Move::Discard { .. })));
}

#[test]
fn discarding_becomes_legal_below_the_cap() {
    let mut state = dealt(2);
    let hint = state
        .legal_moves(0)
        .into_iter()
        .find(|m| matches!(m, Move::RevealColor { .. }))
        .expect("hint available");
    state.apply_move(hint).expect("hint");
    assert_eq!(state.information_tokens(), 7);
    assert!(state.move_is_legal(Move::Discard { index: 0 }));
}

#[test]
fn hints_require_information_tokens() {
    let mut state = dealt(3);
    state.edit().set_information_tokens(0);
    assert!(state
        .legal_moves(0)
        .iter()
        .all(|m| matches!(m, Move::Play { .. } | Move::Discard { .. })));
}

#[test]
fn self_hints_and_out_of_range_offsets_are_illegal() {
    let state = dealt(4);
    let color = state.hand(0).cards()[0].color;
    assert!(!state.move_is_legal(Move::RevealColor {
        target_offset: 0,
        color
    }));
    assert!(!state.move_is_legal(Move::RevealColor {
        target_offset: 2,
        color
    }));
}

#[test]
fn a_hint_must_match_at_least_one_card() {
    let mut state = dealt(5);
    // give the partner a hand with no red cards
    state
        .edit()
        .set_hand(1, vec![Card::new(1, 0), Card::new(2, 1), Card::new(3, 2)])
        .expect("edit hand");
    assert!(!state.move_is_legal(Move::RevealColor {
        target_offset: 1,
        color: 0
    }));
    assert!(state.move_is_legal(Move::RevealColor {
        target_offset: 1,
        color: 1
    }));
    assert!(!state.move_is_legal(Move::RevealRank {
        target_offset: 1,
        rank: 4
    }));
    assert!(state.move_is_legal(Move::RevealRank {
        target_offset: 1,
        rank: 0
    }));
}

#[test]
fn card_indices_must_be_in_range() {
    let state = dealt(6);
    assert!(state.move_is_legal(Move::Play { index: 4 }));
    assert!(!state.move_is_legal(Move::Play { index: 5 }));
}

#[test]
fn players_cannot_deal_and_chance_cannot_play() {
    let mut state = dealt(7);
    assert!(!state.move_is_legal(Move::Deal { color: 0, rank: 0 }));
    state.apply_move(Move::Play { index: 0 }).expect("play");
    assert_eq!(state.cur_player(), Actor::Chance);
    assert!(!state.move_is_legal(Move::Play { index: 0 }));
    assert!(!state.move_is_legal(Move::Discard { index: 0 }));
    let (card, _) = state.deck().cells().next().expect("deck non-empty");
    assert!(state.move_is_legal(Move::Deal {
        color: card.color,
        rank: card.rank
    }));
}

#[test]
fn applying_an_illegal_move_is_rejected_without_effect() {
    let mut state = dealt(8);
    let before_tokens = state.information_tokens();
    let before_history = state.move_history().len();
    let err = state.apply_move(Move::Discard { index: 0 }).unwrap_err();
    assert_eq!(err, GameError::IllegalMove(Move::Discard { index: 0 }));
    assert_eq!(state.information_tokens(), before_tokens);
    assert_eq!(state.move_history().len(), before_history);
    assert_eq!(state.cur_player(), Actor::Player(0));
}

#[test]
fn hint_application_spends_a_token_and_records_masks() {
    let mut state = dealt(9);
    let color = state.hand(1).cards()[0].color;
    state
        .apply_move(Move::RevealColor {
            target_offset: 1,
            color,
        })
        .expect("hint");
    assert_eq!(state.information_tokens(), 7);
    let item = state.move_history().last().unwrap();
    assert_eq!(item.actor, Actor::Player(0));
    assert_ne!(item.reveal_bitmask, 0);
    assert_eq!(item.reveal_bitmask & 1, 1, "position 0 matched its own hint");
    // a fresh hand has everything to learn
    assert_ne!(item.newly_revealed_bitmask, 0);
}
