use hanabi_engine::cards::Card;
use hanabi_engine::hand::{CardKnowledge, Hand};

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add_card(card, CardKnowledge::new(5, 5));
    }
    hand
}

#[test]
fn fresh_knowledge_considers_everything_plausible() {
    let k = CardKnowledge::new(5, 5);
    assert!(!k.color_hinted());
    assert!(!k.rank_hinted());
    assert!((0..5).all(|c| k.color_plausible(c)));
    assert!((0..5).all(|r| k.rank_plausible(r)));
}

#[test]
fn color_hint_eliminates_every_other_color() {
    let mut k = CardKnowledge::new(5, 5);
    k.apply_is_color_hint(2);
    assert_eq!(k.hinted_color(), Some(2));
    for c in 0..5 {
        assert_eq!(k.color_plausible(c), c == 2);
    }
    assert!(
        (0..5).all(|r| k.rank_plausible(r)),
        "a color hint says nothing about ranks"
    );
}

#[test]
fn negative_hints_accumulate_and_never_reinstate() {
    let mut k = CardKnowledge::new(5, 5);
    k.apply_is_not_rank_hint(0);
    k.apply_is_not_rank_hint(3);
    assert!(!k.rank_plausible(0));
    assert!(!k.rank_plausible(3));
    assert!(k.rank_plausible(1));
    k.apply_is_rank_hint(1);
    assert_eq!(k.hinted_rank(), Some(1));
    assert!(!k.rank_plausible(0));
    assert!(!k.rank_plausible(3));
}

#[test]
fn reveal_color_updates_matches_and_non_matches() {
    let mut hand = hand_of(&[Card::new(0, 0), Card::new(1, 2), Card::new(0, 3)]);
    let changed = hand.reveal_color(0);
    assert_eq!(changed, 0b111, "all three cards learned something");
    assert_eq!(hand.color_bitmask(0), 0b101);
    assert_eq!(hand.knowledge()[0].hinted_color(), Some(0));
    assert_eq!(hand.knowledge()[2].hinted_color(), Some(0));
    // the non-match learned it is not this color, but was not hinted
    assert!(!hand.knowledge()[1].color_plausible(0));
    assert!(!hand.knowledge()[1].color_hinted());
}

#[test]
fn repeated_reveal_teaches_nothing_new() {
    let mut hand = hand_of(&[Card::new(0, 0), Card::new(1, 2)]);
    assert_eq!(hand.reveal_rank(0), 0b11);
    assert_eq!(hand.reveal_rank(0), 0);
}

#[test]
fn removal_compacts_and_routes_to_discard_pile() {
    let mut hand = hand_of(&[Card::new(0, 0), Card::new(1, 1), Card::new(2, 2)]);
    let mut pile = Vec::new();
    let removed = hand.remove_at(1, Some(&mut pile));
    assert_eq!(removed, Card::new(1, 1));
    assert_eq!(pile, vec![Card::new(1, 1)]);
    assert_eq!(hand.cards(), &[Card::new(0, 0), Card::new(2, 2)]);
    assert_eq!(hand.knowledge().len(), 2);
}

#[test]
fn played_cards_skip_the_discard_pile() {
    let mut hand = hand_of(&[Card::new(4, 4)]);
    let removed = hand.remove_at(0, None);
    assert_eq!(removed, Card::new(4, 4));
    assert!(hand.is_empty());
}

#[test]
fn reveal_masks_follow_hand_order_after_removal() {
    let mut hand = hand_of(&[Card::new(0, 0), Card::new(1, 0), Card::new(2, 0)]);
    hand.remove_at(0, None);
    assert_eq!(hand.color_bitmask(1), 0b01);
    assert_eq!(hand.color_bitmask(2), 0b10);
}

#[test]
fn knowledge_renders_hints_and_plausibilities() {
    let mut k = CardKnowledge::new(5, 5);
    assert_eq!(k.to_string(), "XX|RYGWB12345");
    k.apply_is_color_hint(0);
    k.apply_is_not_rank_hint(4);
    assert_eq!(k.to_string(), "RX|R1234");
}
