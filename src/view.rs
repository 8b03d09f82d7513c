//! Read-only table snapshots for presentation layers.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Game, Phase};
use crate::participant::Participant;
use crate::result::RoundResult;

/// What a renderer may show of one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    /// Display name.
    pub name: String,
    /// Visible cards.
    pub cards: Vec<Card>,
    /// Score, or `None` while it would reveal a hidden card.
    pub score: Option<u8>,
}

impl SeatView {
    fn open(participant: &Participant) -> Self {
        Self {
            name: participant.name().to_string(),
            cards: participant.cards().to_vec(),
            score: Some(participant.score()),
        }
    }

    fn up_card_only(participant: &Participant) -> Self {
        Self {
            name: participant.name().to_string(),
            cards: participant.cards().iter().take(1).copied().collect(),
            score: None,
        }
    }
}

/// A snapshot of the table taken between two actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current phase.
    pub phase: Phase,
    /// Current round, starting at 1.
    pub current_round: u32,
    /// Rounds in the session.
    pub number_of_rounds: u32,
    /// Index of the player to act (equal to `players.len()` once all acted).
    pub current_player: usize,
    /// The dealer; only the up card is listed while `hole_hidden` is set.
    pub dealer: SeatView,
    /// Whether the dealer's remaining cards are face down.
    pub hole_hidden: bool,
    /// Number of face-down dealer cards.
    pub hidden_cards: usize,
    /// Players in seat order.
    pub players: Vec<SeatView>,
    /// Settlement of the round just played, in `RoundEnd` and `GameOver`.
    pub result: Option<RoundResult>,
}

impl TableView {
    pub(crate) fn of(game: &Game) -> Self {
        let phase = game.phase();
        let dealer = game.dealer();
        let hole_hidden = phase.hides_hole_card();

        let (dealer_view, hidden_cards) = if hole_hidden {
            let view = SeatView::up_card_only(dealer);
            let hidden = dealer.cards().len() - view.cards.len();
            (view, hidden)
        } else {
            (SeatView::open(dealer), 0)
        };

        Self {
            phase,
            current_round: game.current_round(),
            number_of_rounds: game.number_of_rounds(),
            current_player: game.current_player(),
            dealer: dealer_view,
            hole_hidden,
            hidden_cards,
            players: game.players().iter().map(SeatView::open).collect(),
            result: game.round_result().cloned(),
        }
    }

    /// Returns the round number clamped to the session length, for headers.
    #[must_use]
    pub fn display_round(&self) -> u32 {
        self.current_round.min(self.number_of_rounds)
    }

    /// Returns the player whose turn it is, if any.
    #[must_use]
    pub fn acting_player(&self) -> Option<&SeatView> {
        if self.phase == Phase::PlayerTurn {
            self.players.get(self.current_player)
        } else {
            None
        }
    }
}
