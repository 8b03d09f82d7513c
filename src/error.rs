//! Error types for table setup and play.

use thiserror::Error;

/// Errors that can occur when configuring a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The table has no player seats.
    #[error("at least one player is required")]
    NoPlayers,
    /// More players than a single deck can deal to.
    #[error("{requested} players requested, a single deck seats at most {max}")]
    TooManyPlayers {
        /// Requested number of players.
        requested: u8,
        /// Largest supported number of players.
        max: u8,
    },
    /// The session has no rounds.
    #[error("at least one round is required")]
    NoRounds,
    /// Dealer stand threshold outside `2..=21`.
    #[error("dealer stand threshold {0} is outside 2..=21")]
    InvalidDealerThreshold(u8),
}

/// Errors that can occur while applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The deck ran out and the table is configured to halt.
    #[error("no cards left in the shoe")]
    ShoeEmpty,
}
