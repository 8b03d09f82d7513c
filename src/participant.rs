//! Seated participants: players and the dealer.

use alloc::string::String;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{self, Hand};

/// Which turn policy the table applies to a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Acts on external input.
    Player,
    /// Draws automatically until reaching the stand threshold.
    Dealer,
}

/// A participant at the table.
///
/// Players and the dealer share this structure; the game decides how each
/// one acts based on its [`Role`]. The score is cached and refreshed by every
/// operation that changes the hand.
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    role: Role,
    hand: Hand,
    score: u8,
}

impl Participant {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            hand: Hand::new(),
            score: 0,
        }
    }

    /// Creates a player.
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Self::new(name, Role::Player)
    }

    /// Creates the dealer.
    #[must_use]
    pub fn dealer() -> Self {
        Self::new("Dealer", Role::Dealer)
    }

    /// Draws one card from the deck into the hand.
    ///
    /// Returns `None` and leaves the hand untouched if the deck is empty.
    pub fn hit(&mut self, deck: &mut Deck) -> Option<Card> {
        let card = deck.draw()?;
        self.hand.push(card);
        self.update_score();
        Some(card)
    }

    /// Replaces the hand and recomputes the score.
    pub fn set_hand(&mut self, cards: &[Card]) {
        self.hand = Hand::from_cards(cards);
        self.update_score();
    }

    /// Empties the hand and resets the score to zero.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
        self.score = 0;
    }

    fn update_score(&mut self) {
        self.score = self.hand.value();
    }

    /// Returns the cached score.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns whether the cached score is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        hand::is_bust(self.score)
    }

    /// Returns the participant's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }
}
