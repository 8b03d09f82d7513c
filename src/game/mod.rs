//! Game engine and state management.

use alloc::format;
use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ConfigError, GameError};
use crate::options::{EmptyShoePolicy, GameOptions};
use crate::participant::Participant;
use crate::result::RoundResult;
use crate::view::TableView;

mod actions;
mod dealer;
mod round;
pub mod state;

pub use state::{Action, Flow, Phase};

/// Who receives a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    Player(usize),
    Dealer,
}

/// A single blackjack table that plays a fixed number of rounds.
///
/// The game owns the deck, the dealer and an immutable roster of players.
/// It only changes in response to [`Game::apply`]; adapters read the state
/// back through [`Game::view`].
///
/// # Example
///
/// ```
/// use bjtable::{Action, Game, GameOptions, Phase};
///
/// let mut game = Game::new(GameOptions::default(), 42).unwrap();
/// assert_eq!(game.phase(), Phase::Deal);
///
/// let _ = game.apply(Action::Tick).unwrap();
/// assert_eq!(game.phase(), Phase::PlayerTurn);
/// assert_eq!(game.players()[0].cards().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    dealer: Participant,
    players: Vec<Participant>,
    options: GameOptions,
    phase: Phase,
    current_round: u32,
    current_player: usize,
    history: Vec<RoundResult>,
}

impl Game {
    /// Creates a new game and shuffles a deck seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        let mut deck = Deck::new(seed);
        deck.reset_and_shuffle();
        Self::with_deck(options, deck)
    }

    /// Creates a new game that deals from `deck` as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    pub fn with_deck(options: GameOptions, deck: Deck) -> Result<Self, ConfigError> {
        options.validate()?;

        let players = (1..=options.players)
            .map(|seat| Participant::player(format!("Player {seat}")))
            .collect();

        debug!(
            players = options.players,
            rounds = options.rounds,
            "table created"
        );

        Ok(Self {
            deck,
            dealer: Participant::dealer(),
            players,
            options,
            phase: Phase::Deal,
            current_round: 1,
            current_player: 0,
            history: Vec::new(),
        })
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current round number, starting at 1.
    ///
    /// After the last round has been advanced past this is one more than
    /// [`number_of_rounds`](Self::number_of_rounds).
    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Returns the number of rounds in the session.
    #[must_use]
    pub const fn number_of_rounds(&self) -> u32 {
        self.options.rounds
    }

    /// Returns the index of the player whose turn it is.
    ///
    /// Equal to the number of players once everyone has acted.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the player whose turn it is, if any.
    #[must_use]
    pub fn current_participant(&self) -> Option<&Participant> {
        if self.phase == Phase::PlayerTurn {
            self.players.get(self.current_player)
        } else {
            None
        }
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns whether every round has been played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Returns the settlement of the round that just finished.
    ///
    /// Only available in [`Phase::RoundEnd`] and [`Phase::GameOver`].
    #[must_use]
    pub fn round_result(&self) -> Option<&RoundResult> {
        match self.phase {
            Phase::RoundEnd | Phase::GameOver => self.history.last(),
            _ => None,
        }
    }

    /// Returns the settlement of every completed round, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// Returns a read-only snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::of(self)
    }

    /// Gives mutable access to the deck, e.g. to stack it for a scenario.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Gives mutable access to a player.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is out of range.
    pub fn player_mut(&mut self, seat: usize) -> &mut Participant {
        &mut self.players[seat]
    }

    /// Gives mutable access to the dealer.
    pub const fn dealer_mut(&mut self) -> &mut Participant {
        &mut self.dealer
    }

    /// Forces the state machine into `phase`.
    ///
    /// Intended for replaying scenarios; hands and the deck should be set up
    /// to match before calling.
    ///
    /// # Panics
    ///
    /// Panics if the phase contradicts the round counters: `GameOver` before
    /// the last round has been passed, any other phase after it, or
    /// `PlayerTurn` once every player has acted.
    pub fn set_phase(&mut self, phase: Phase) {
        let finished = self.current_round > self.options.rounds;
        assert!(
            finished == (phase == Phase::GameOver),
            "phase {phase} contradicts round {}/{}",
            self.current_round,
            self.options.rounds
        );
        if phase == Phase::PlayerTurn {
            assert!(
                self.current_player < self.players.len(),
                "no player left to act"
            );
        }
        self.transition(phase);
    }

    fn transition(&mut self, next: Phase) {
        debug!(from = %self.phase, to = %next, round = self.current_round, "phase change");
        self.phase = next;
    }

    /// Deals one card to `seat`, applying the empty-shoe policy first.
    fn deal_to(&mut self, seat: Seat) -> Result<Card, GameError> {
        if self.deck.is_empty() {
            match self.options.empty_shoe {
                EmptyShoePolicy::Reshuffle => {
                    warn!(round = self.current_round, "shoe empty, reshuffling a fresh deck");
                    self.deck.reset_and_shuffle();
                }
                EmptyShoePolicy::Halt => {
                    warn!(round = self.current_round, "shoe empty, halting");
                    return Err(GameError::ShoeEmpty);
                }
            }
        }

        let participant = match seat {
            Seat::Player(index) => &mut self.players[index],
            Seat::Dealer => &mut self.dealer,
        };
        participant.hit(&mut self.deck).ok_or(GameError::ShoeEmpty)
    }
}
