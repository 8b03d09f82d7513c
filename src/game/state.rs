//! Game phase and action types.

use core::fmt;

/// Phase of the per-round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Hands are about to be dealt.
    Deal,
    /// Waiting for the current player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled; waiting to advance.
    RoundEnd,
    /// Every round has been played.
    GameOver,
}

impl Phase {
    /// Returns the snake-case name of the phase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deal => "deal",
            Self::PlayerTurn => "player_turn",
            Self::DealerTurn => "dealer_turn",
            Self::RoundEnd => "round_end",
            Self::GameOver => "game_over",
        }
    }

    /// Returns whether the phase proceeds without user input.
    #[must_use]
    pub const fn is_automatic(self) -> bool {
        matches!(self, Self::Deal | Self::DealerTurn)
    }

    /// Returns whether the dealer's hole card is hidden in this phase.
    #[must_use]
    pub const fn hides_hole_card(self) -> bool {
        matches!(self, Self::Deal | Self::PlayerTurn)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An input event fed to [`Game::apply`](super::Game::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Current player draws a card.
    Hit,
    /// Current player keeps their hand.
    Stand,
    /// Move on from a settled round.
    Advance,
    /// Leave the table.
    Quit,
    /// No input; lets automatic phases run.
    Tick,
}

/// What the driver should do after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Stop the session.
    Exit,
}
