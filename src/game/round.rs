use tracing::debug;

use super::{Game, Phase};

impl Game {
    /// Moves past a settled round: either reshuffles for the next deal or
    /// ends the session after the last round.
    pub(super) fn advance_round(&mut self) {
        self.current_round += 1;
        self.current_player = 0;

        if self.current_round > self.options.rounds {
            debug!(rounds = self.options.rounds, "all rounds played");
            self.transition(Phase::GameOver);
        } else {
            self.deck.reset_and_shuffle();
            self.transition(Phase::Deal);
        }
    }
}
