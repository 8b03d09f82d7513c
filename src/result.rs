//! Round settlement types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::is_bust;
use crate::options::TieRule;

/// Result of a player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player loses (player busts, dealer is higher, or a tie under
    /// [`TieRule::DealerWins`]).
    Lose,
    /// Tie under [`TieRule::Push`].
    Push,
}

impl Outcome {
    /// Settles a player's score against the dealer's.
    ///
    /// ```
    /// use bjtable::{Outcome, TieRule};
    ///
    /// assert_eq!(Outcome::settle(20, 19, TieRule::DealerWins), Outcome::Win);
    /// assert_eq!(Outcome::settle(21, 21, TieRule::DealerWins), Outcome::Lose);
    /// assert_eq!(Outcome::settle(21, 21, TieRule::Push), Outcome::Push);
    /// ```
    #[must_use]
    pub const fn settle(player: u8, dealer: u8, tie_rule: TieRule) -> Self {
        if is_bust(player) {
            return Self::Lose;
        }
        if is_bust(dealer) || player > dealer {
            return Self::Win;
        }
        if player == dealer && matches!(tie_rule, TieRule::Push) {
            return Self::Push;
        }
        Self::Lose
    }

    /// Returns a verb for display, e.g. `"wins"`.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Win => "wins",
            Self::Lose => "loses",
            Self::Push => "pushes",
        }
    }
}

/// Result for a single player after the dealer has played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Seat index.
    pub seat: usize,
    /// Player name.
    pub name: String,
    /// The player's final score.
    pub score: u8,
    /// The outcome against the dealer.
    pub outcome: Outcome,
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Results for each player in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns the number of players with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.players.iter().filter(|p| p.outcome == outcome).count()
    }
}
