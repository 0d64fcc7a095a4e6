// Read-only view of a round, handed to strategies when they decide. It lets a
// strategy look at the table without reaching the deck order or the dealer's
// hole card. It is implemented for the core `BlackJack` type.

use crate::cards::Card;
use crate::game::Phase;
use crate::player::{Player, ShownCard};

pub trait GameEngine {
    fn phase(&self) -> Phase;

    /// The dealer's face-up card, once dealt.
    fn dealer_upcard(&self) -> Option<Card>;
    /// The dealer's cards as the table sees them (second card face down).
    fn dealer_cards(&self) -> Vec<ShownCard>;

    fn num_seats(&self) -> usize;
    fn seat(&self, index: usize) -> Option<&Player>;

    fn cards_remaining(&self) -> usize;
}

impl GameEngine for crate::game::BlackJack<'_> {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.hand().first()
    }
    fn dealer_cards(&self) -> Vec<ShownCard> {
        self.dealer.cards().shown()
    }

    fn num_seats(&self) -> usize {
        self.players.len()
    }
    fn seat(&self, index: usize) -> Option<&Player> {
        self.players.get(index).map(|p| &**p)
    }

    fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
