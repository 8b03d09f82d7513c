use crate::card::Card;
use crate::error::GameError;

use super::{Action, Flow, Game, Phase, Seat};

use tracing::{debug, trace};

impl Game {
    /// Applies one input event to the state machine.
    ///
    /// `Quit` ends the session from any phase without completing the pending
    /// transition. Actions that mean nothing in the current phase are
    /// ignored. `Deal` and `DealerTurn` run to completion on any other
    /// action, usually [`Action::Tick`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ShoeEmpty`] if the deck runs out while the table
    /// is configured with [`EmptyShoePolicy::Halt`](crate::EmptyShoePolicy::Halt).
    pub fn apply(&mut self, action: Action) -> Result<Flow, GameError> {
        if action == Action::Quit {
            debug!(phase = %self.phase, "quit");
            return Ok(Flow::Exit);
        }

        match (self.phase, action) {
            (Phase::Deal, _) => self.deal_initial_cards()?,
            (Phase::PlayerTurn, Action::Hit) => {
                self.hit()?;
            }
            (Phase::PlayerTurn, Action::Stand) => self.stand(),
            (Phase::DealerTurn, _) => self.dealer_play()?,
            (Phase::RoundEnd, Action::Advance) => self.advance_round(),
            (phase, action) => trace!(%phase, ?action, "action ignored"),
        }

        Ok(Flow::Continue)
    }

    /// Current player draws a card; a bust ends their turn.
    fn hit(&mut self) -> Result<Card, GameError> {
        let seat = self.current_player;
        debug_assert!(seat < self.players.len(), "player index out of range");

        let card = self.deal_to(Seat::Player(seat))?;
        let player = &self.players[seat];
        debug!(player = player.name(), %card, score = player.score(), "hit");

        if player.is_bust() {
            debug!(player = player.name(), score = player.score(), "bust");
            self.advance_player();
        }

        Ok(card)
    }

    /// Current player keeps their hand.
    fn stand(&mut self) {
        let player = &self.players[self.current_player];
        debug!(player = player.name(), score = player.score(), "stand");
        self.advance_player();
    }

    /// Moves to the next player, or to the dealer once everyone has acted.
    fn advance_player(&mut self) {
        self.current_player += 1;
        if self.current_player >= self.players.len() {
            self.transition(Phase::DealerTurn);
        }
    }
}
