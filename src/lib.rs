//! A single-table blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] state machine that deals a fixed number of
//! rounds to a roster of players and a dealer. Front ends feed it [`Action`]s
//! and render the [`TableView`] it hands back.
//!
//! # Example
//!
//! ```
//! use bjtable::{Action, Flow, Game, GameOptions, Phase};
//!
//! let mut game = Game::new(GameOptions::default().with_players(1).with_rounds(1), 7).unwrap();
//! while !game.is_over() {
//!     let action = match game.phase() {
//!         Phase::PlayerTurn => Action::Stand,
//!         Phase::RoundEnd => Action::Advance,
//!         _ => Action::Tick,
//!     };
//!     assert_eq!(game.apply(action).unwrap(), Flow::Continue);
//! }
//! assert_eq!(game.history().len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod participant;
pub mod result;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ConfigError, GameError};
pub use game::{Action, Flow, Game, Phase};
pub use hand::Hand;
pub use options::{EmptyShoePolicy, GameOptions, TieRule};
pub use participant::{Participant, Role};
pub use result::{Outcome, PlayerResult, RoundResult};
pub use view::{SeatView, TableView};
