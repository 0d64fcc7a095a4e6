use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ordinal value used for ordering: 2..=10 literal, J=11, Q=12, K=13, A=14.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Scoring value: faces count 10, an ace counts 1 (the hand decides on the 11).
    pub const fn points(self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 1,
            other => other as u8,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "j",
            Rank::Queen => "q",
            Rank::King => "k",
            Rank::Ace => "a",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let r = match s.to_ascii_lowercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "j" => Rank::Jack,
            "q" => Rank::Queen,
            "k" => Rank::King,
            "a" => Rank::Ace,
            _ => return Err(CardError::InvalidRank(s.to_string())),
        };
        Ok(r)
    }
}

/// Four suits, declared in deck-building order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Hearts,
    Diamonds,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Diamonds, Suit::Spades];

    pub const fn as_str(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "hearts" => Ok(Suit::Hearts),
            "diamonds" => Ok(Suit::Diamonds),
            "spades" => Ok(Suit::Spades),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("rank must be 2-10, j, q, k or a, got '{0}'")]
    InvalidRank(String),
    #[error("suit must be clubs, hearts, diamonds or spades, got '{0}'")]
    InvalidSuit(String),
    #[error("expected '<rank> of <suit>', got '{0}'")]
    Malformed(String),
}

/// A playing card: rank + suit.
///
/// `==` is full identity. Blackjack mostly cares about rank alone, which is
/// what [`Card::rank_eq`] and [`Card::cmp_rank`] compare.
///
/// ```
/// use blackjack_rs::cards::{Card, Rank, Suit};
///
/// let ace = Card::parse("A", "Hearts").unwrap();
/// assert_eq!(ace, Card::new(Rank::Ace, Suit::Hearts));
/// assert!(ace.rank_eq(&Card::new(Rank::Ace, Suit::Spades)));
/// assert_eq!(ace.to_string(), "a of hearts");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from loose text, e.g. `("K", "spades")`. Case-insensitive.
    pub fn parse(rank: &str, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Ordinal value of the rank (2..=14).
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Scoring value of the rank (faces 10, ace 1).
    pub const fn points(self) -> u8 {
        self.rank.points()
    }

    /// True when both cards share a rank, whatever their suits.
    pub fn rank_eq(&self, other: &Card) -> bool {
        self.rank == other.rank
    }

    /// Order two cards by rank alone.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.value().cmp(&other.value())
    }

    pub fn is_ace(&self) -> bool {
        self.rank_eq(&ACE)
    }

    /// 10, J, Q, K or A: the up cards that force a dealer blackjack check.
    pub fn is_ten_or_ace(&self) -> bool {
        self.is_ace() || self.points() == 10
    }
}

/// Reference ace for rank comparisons; its suit is irrelevant.
const ACE: Card = Card::new(Rank::Ace, Suit::Spades);

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(rank), Some(of), Some(suit), None) if of.eq_ignore_ascii_case("of") => {
                Card::parse(rank, suit)
            }
            _ => Err(CardError::Malformed(s.to_string())),
        }
    }
}

/// Parse a comma-separated list of cards.
///
/// ```
/// use blackjack_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("a of spades, 10 of hearts").unwrap();
/// assert_eq!(cards, vec![Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ten, Suit::Hearts)]);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input.split(',').map(str::trim).filter(|s| !s.is_empty()).map(Card::from_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_from_str_is_case_insensitive() {
        assert_eq!(Rank::from_str("A").unwrap(), Rank::Ace);
        assert_eq!(Rank::from_str("q").unwrap(), Rank::Queen);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert!(matches!(Rank::from_str("1"), Err(CardError::InvalidRank(_))));
        assert!(matches!(Rank::from_str("T"), Err(CardError::InvalidRank(_))));
    }

    #[test]
    fn suit_from_str_is_case_insensitive() {
        assert_eq!(Suit::from_str("Hearts").unwrap(), Suit::Hearts);
        assert!(matches!(Suit::from_str("h"), Err(CardError::InvalidSuit(_))));
        assert!(matches!(Suit::from_str("stars"), Err(CardError::InvalidSuit(_))));
    }

    #[test]
    fn parse_rejects_bad_rank_before_suit() {
        assert_eq!(Card::parse("11", "clubs"), Err(CardError::InvalidRank("11".into())));
        assert_eq!(Card::parse("k", "cups"), Err(CardError::InvalidSuit("cups".into())));
    }

    #[test]
    fn value_and_points_differ_for_faces() {
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::King.points(), 10);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::Ace.points(), 1);
        assert_eq!(Rank::Seven.points(), 7);
    }

    #[test]
    fn rank_eq_ignores_suit() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let kh = Card::new(Rank::King, Suit::Hearts);
        assert!(ah.rank_eq(&as_));
        assert_ne!(ah, as_);
        assert!(!ah.rank_eq(&kh));
        assert!(ah.is_ace());
        assert!(kh.is_ten_or_ace());
        assert!(!Card::new(Rank::Nine, Suit::Clubs).is_ten_or_ace());
    }

    #[test]
    fn cmp_rank_orders_by_value() {
        let two = Card::new(Rank::Two, Suit::Spades);
        let ace = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(two.cmp_rank(&ace), Ordering::Less);
        assert_eq!(ace.cmp_rank(&Card::new(Rank::Ace, Suit::Hearts)), Ordering::Equal);
        assert!(ace > two);
    }

    #[test]
    fn display_round_trips() {
        let c = Card::new(Rank::Ten, Suit::Diamonds);
        assert_eq!(c.to_string(), "10 of diamonds");
        assert_eq!(Card::from_str("10 of diamonds").unwrap(), c);
        assert_eq!(Card::from_str("J OF Clubs").unwrap(), Card::new(Rank::Jack, Suit::Clubs));
        assert!(matches!(Card::from_str("jack"), Err(CardError::Malformed(_))));
    }
}
