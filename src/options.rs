//! Table configuration options.

use crate::card::DECK_SIZE;
use crate::error::ConfigError;
use crate::hand::BLACKJACK;

/// How a player's score equal to the dealer's is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieRule {
    /// Equal scores lose to the dealer.
    #[default]
    DealerWins,
    /// Equal scores (both 21 or under) are a push.
    Push,
}

/// What happens when the deck runs out in the middle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmptyShoePolicy {
    /// Replace the deck with a freshly shuffled one and keep dealing.
    #[default]
    Reshuffle,
    /// Stop and report [`GameError::ShoeEmpty`](crate::GameError::ShoeEmpty).
    Halt,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{GameOptions, TieRule};
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_rounds(5)
///     .with_tie_rule(TieRule::Push);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of player seats.
    pub players: u8,
    /// Number of rounds in the session.
    pub rounds: u32,
    /// The dealer keeps drawing while below this score.
    pub dealer_stands_on: u8,
    /// Settlement of equal scores.
    pub tie_rule: TieRule,
    /// Behaviour when the deck is exhausted mid-round.
    pub empty_shoe: EmptyShoePolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 2,
            rounds: 3,
            dealer_stands_on: 17,
            tie_rule: TieRule::DealerWins,
            empty_shoe: EmptyShoePolicy::Reshuffle,
        }
    }
}

impl GameOptions {
    /// Largest table a single deck can deal the opening two cards to,
    /// counting the dealer.
    pub const MAX_PLAYERS: u8 = (DECK_SIZE / 2 - 1) as u8;

    /// Sets the number of player seats.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds(10);
    /// assert_eq!(options.rounds, 10);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the score at which the dealer stops drawing.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = score;
        self
    }

    /// Sets how ties are settled.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, TieRule};
    ///
    /// let options = GameOptions::default().with_tie_rule(TieRule::Push);
    /// assert_eq!(options.tie_rule, TieRule::Push);
    /// ```
    #[must_use]
    pub const fn with_tie_rule(mut self, rule: TieRule) -> Self {
        self.tie_rule = rule;
        self
    }

    /// Sets the empty-shoe policy.
    #[must_use]
    pub const fn with_empty_shoe(mut self, policy: EmptyShoePolicy) -> Self {
        self.empty_shoe = policy;
        self
    }

    /// Checks that the options describe a playable session.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players, no rounds, more players than
    /// one deck can deal to, or a dealer threshold outside `2..=21`.
    ///
    /// ```
    /// use bjtable::{ConfigError, GameOptions};
    ///
    /// let options = GameOptions::default().with_players(0);
    /// assert_eq!(options.validate(), Err(ConfigError::NoPlayers));
    /// ```
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.players > Self::MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                requested: self.players,
                max: Self::MAX_PLAYERS,
            });
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.dealer_stands_on < 2 || self.dealer_stands_on > BLACKJACK {
            return Err(ConfigError::InvalidDealerThreshold(self.dealer_stands_on));
        }
        Ok(())
    }
}
