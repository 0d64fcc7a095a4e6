use crate::cards::Card;
use std::fmt;

/// Cards held by one party for one round.
///
/// ```
/// use blackjack_rs::cards::parse_cards;
/// use blackjack_rs::hand::Hand;
///
/// let hand = Hand::from_cards(parse_cards("a of diamonds, k of hearts").unwrap());
/// assert_eq!(hand.sum(), 21);
/// assert!(hand.is_blackjack());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Append a card; returns `self` so adds can be chained.
    pub fn add(&mut self, card: Card) -> &mut Self {
        self.cards.push(card);
        self
    }

    pub fn extend<I>(&mut self, cards: I) -> &mut Self
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
        self
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn num_aces(&self) -> usize {
        self.cards.iter().filter(|c| c.is_ace()).count()
    }

    /// Blackjack total.
    ///
    /// Non-aces score their points. With aces present, at most one of them is
    /// promoted to 11, and only if that keeps the total at 21 or below; every
    /// other ace counts 1. Two aces therefore make 12, never 22.
    pub fn sum(&self) -> u32 {
        let aces = self.num_aces() as u32;
        let non_ace: u32 =
            self.cards.iter().filter(|c| !c.is_ace()).map(|c| u32::from(c.points())).sum();
        if aces == 0 {
            return non_ace;
        }
        let low = non_ace + aces;
        let high = low + 10;
        if high <= 21 {
            high
        } else {
            low
        }
    }

    pub fn is_bust(&self) -> bool {
        self.sum() > 21
    }

    /// Two cards totalling 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.sum() == 21
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank, Suit};

    fn hand(s: &str) -> Hand {
        Hand::from_cards(parse_cards(s).unwrap())
    }

    #[test]
    fn sums_without_aces() {
        assert_eq!(hand("2 of clubs, 5 of diamonds").sum(), 7);
        assert_eq!(hand("k of hearts, q of diamonds").sum(), 20);
        assert_eq!(Hand::new().sum(), 0);
    }

    #[test]
    fn one_ace_goes_high_when_it_fits() {
        assert_eq!(hand("a of diamonds, k of hearts").sum(), 21);
        assert_eq!(hand("a of diamonds, 5 of hearts").sum(), 16);
        assert_eq!(hand("a of diamonds, 5 of hearts, 9 of clubs").sum(), 15);
    }

    #[test]
    fn only_one_ace_is_ever_high() {
        assert_eq!(hand("a of diamonds, a of spades").sum(), 12);
        assert_eq!(hand("a of diamonds, a of spades, 9 of hearts").sum(), 21);
        assert_eq!(hand("a of diamonds, k of hearts, a of spades").sum(), 12);
        assert_eq!(hand("a of clubs, a of diamonds, a of hearts, a of spades").sum(), 14);
    }

    #[test]
    fn add_chains_and_clear_empties() {
        let mut h = Hand::new();
        h.add(Card::new(Rank::Nine, Suit::Clubs)).add(Card::new(Rank::Eight, Suit::Hearts));
        assert_eq!(h.len(), 2);
        assert_eq!(h.sum(), 17);
        h.clear();
        assert!(h.is_empty());
    }

    #[test]
    fn bust_and_blackjack_flags() {
        assert!(hand("k of hearts, q of diamonds, 2 of clubs").is_bust());
        assert!(!hand("a of hearts, 9 of diamonds, a of clubs").is_blackjack());
        assert!(hand("10 of hearts, a of clubs").is_blackjack());
    }

    #[test]
    fn display_joins_with_commas() {
        assert_eq!(hand("a of diamonds, 10 of hearts").to_string(), "a of diamonds, 10 of hearts");
    }
}
