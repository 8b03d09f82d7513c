//! The shoe: a single 52-card deck drawn from the top.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::{Card, DECK_SIZE, Suit};

/// Builds one standard deck in canonical order (suit by suit, Ace to King).
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Card::ACE..=Card::KING {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// An ordered deck of cards used as a stack.
///
/// The deck owns its random source, so two decks built from the same seed
/// shuffle identically. A new deck is empty until
/// [`reset_and_shuffle`](Self::reset_and_shuffle) is called.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the last element is the top of the deck.
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an empty deck whose shuffles are driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an empty deck using the given random source.
    #[must_use]
    pub const fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: Vec::new(),
            rng,
        }
    }

    /// Creates a deck that deals `draws` in order (first element drawn first).
    ///
    /// Reshuffling a stacked deck replaces it with a random full deck seeded
    /// from zero.
    ///
    /// ```
    /// use bjtable::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::stacked(&[Card::new(Suit::Hearts, 1), Card::new(Suit::Clubs, 9)]);
    /// assert_eq!(deck.draw(), Some(Card::new(Suit::Hearts, 1)));
    /// assert_eq!(deck.draw(), Some(Card::new(Suit::Clubs, 9)));
    /// assert_eq!(deck.draw(), None);
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut deck = Self::new(0);
        deck.restack(draws);
        deck
    }

    /// Replaces the remaining cards so that `draws` come out in order.
    pub fn restack(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().copied().collect();
    }

    /// Discards the current contents, rebuilds a full 52-card deck and
    /// shuffles it.
    ///
    /// Cards dealt before the call are not tracked and never return to the
    /// deck; every call starts from a fresh standard deck.
    pub fn reset_and_shuffle(&mut self) {
        let mut cards = standard_deck();
        cards.shuffle(&mut self.rng);
        self.cards = cards;
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        if let Some(card) = card {
            trace!(%card, remaining = self.cards.len(), "card drawn");
        }
        card
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first (the last element is drawn
    /// next).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
