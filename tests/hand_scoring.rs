use blackjack_rs::cards::{parse_cards, Card, Rank, Suit};
use blackjack_rs::hand::Hand;
use proptest::prelude::*;

fn hand(s: &str) -> Hand {
    Hand::from_cards(parse_cards(s).expect("valid cards"))
}

#[test]
fn reference_totals() {
    assert_eq!(hand("2 of clubs, 5 of diamonds").sum(), 7);
    assert_eq!(hand("k of hearts, q of diamonds").sum(), 20);
    assert_eq!(hand("a of diamonds, k of hearts").sum(), 21);
    assert_eq!(hand("a of diamonds, a of spades").sum(), 12);
    assert_eq!(hand("a of diamonds, a of spades, 9 of hearts").sum(), 21);
}

#[test]
fn adding_a_card_can_demote_the_ace() {
    let mut h = hand("a of diamonds, k of hearts, a of spades");
    assert_eq!(h.sum(), 12);
    h.add(Card::new(Rank::Eight, Suit::Hearts));
    assert_eq!(h.sum(), 20);
}

#[test]
fn card_equality_is_identity_but_rank_eq_ignores_suit() {
    let ah = Card::parse("a", "hearts").unwrap();
    let as_ = Card::parse("a", "spades").unwrap();
    let kh = Card::parse("k", "hearts").unwrap();
    assert!(ah.rank_eq(&as_));
    assert!(!ah.rank_eq(&kh));
    assert_ne!(ah, as_);
}

fn any_card() -> impl Strategy<Value = Card> {
    (0usize..13, 0usize..4).prop_map(|(r, s)| Card::new(Rank::ALL[r], Suit::ALL[s]))
}

proptest! {
    #[test]
    fn sum_matches_single_high_ace_rule(cards in prop::collection::vec(any_card(), 0..8)) {
        let h = Hand::from_cards(cards.clone());
        let aces = cards.iter().filter(|c| c.rank() == Rank::Ace).count() as u32;
        let non_ace: u32 = cards
            .iter()
            .filter(|c| c.rank() != Rank::Ace)
            .map(|c| match c.rank() {
                Rank::Jack | Rank::Queen | Rank::King => 10,
                r => u32::from(r.value()),
            })
            .sum();
        let low = non_ace + aces;
        let expected = if aces > 0 && low + 10 <= 21 { low + 10 } else { low };
        prop_assert_eq!(h.sum(), expected);
    }

    #[test]
    fn sum_never_exceeds_low_total_plus_ten(cards in prop::collection::vec(any_card(), 1..8)) {
        let h = Hand::from_cards(cards.clone());
        let low: u32 = cards.iter().map(|c| u32::from(c.points())).sum();
        prop_assert!(h.sum() == low || h.sum() == low + 10);
        if h.sum() == low + 10 {
            prop_assert!(h.sum() <= 21);
        }
    }
}
