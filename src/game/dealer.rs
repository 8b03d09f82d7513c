use alloc::string::ToString;
use alloc::vec::Vec;

use tracing::debug;

use crate::error::GameError;
use crate::result::{Outcome, PlayerResult, RoundResult};

use super::{Game, Phase, Seat};

/// Cards each participant receives at the start of a round.
const INITIAL_CARDS: usize = 2;

impl Game {
    /// Clears every hand and deals two cards to each player in seat order,
    /// then two to the dealer.
    pub(super) fn deal_initial_cards(&mut self) -> Result<(), GameError> {
        debug!(round = self.current_round, remaining = self.deck.len(), "dealing");

        for player in &mut self.players {
            player.clear_hand();
        }
        self.dealer.clear_hand();
        self.current_player = 0;

        for seat in 0..self.players.len() {
            for _ in 0..INITIAL_CARDS {
                self.deal_to(Seat::Player(seat))?;
            }
        }
        for _ in 0..INITIAL_CARDS {
            self.deal_to(Seat::Dealer)?;
        }

        self.transition(Phase::PlayerTurn);
        Ok(())
    }

    /// Dealer draws until reaching the stand threshold, then the round is
    /// settled.
    ///
    /// The dealer plays even when every player has busted.
    pub(super) fn dealer_play(&mut self) -> Result<(), GameError> {
        let threshold = self.options.dealer_stands_on;
        while self.dealer.score() < threshold {
            let card = self.deal_to(Seat::Dealer)?;
            debug!(%card, score = self.dealer.score(), "dealer draws");
        }

        let result = self.settle();
        debug!(
            round = result.round,
            dealer_score = result.dealer_score,
            wins = result.count(Outcome::Win),
            "round settled"
        );
        self.history.push(result);

        self.transition(Phase::RoundEnd);
        Ok(())
    }

    fn settle(&self) -> RoundResult {
        let dealer_score = self.dealer.score();
        let players: Vec<PlayerResult> = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, player)| PlayerResult {
                seat,
                name: player.name().to_string(),
                score: player.score(),
                outcome: Outcome::settle(player.score(), dealer_score, self.options.tie_rule),
            })
            .collect();

        RoundResult {
            round: self.current_round,
            players,
            dealer_score,
            dealer_bust: self.dealer.is_bust(),
        }
    }
}
