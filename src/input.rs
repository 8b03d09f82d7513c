//! Key bindings from raw input text to table actions.

use crate::game::{Action, Phase};

/// Maps a line of input to an action for the given phase.
///
/// `Deal` and `DealerTurn` need no input, so anything (including an empty
/// line) ticks them forward. Unknown keys map to `None`.
///
/// | key | action |
/// |---|---|
/// | `h`, `hit` | hit |
/// | `s`, `stand` | stand |
/// | empty, space, `enter`, `n`, `next` | advance |
/// | `q`, `quit`, `ctrl+c` | quit |
///
/// ```
/// use bjtable::{Action, Phase, input::action_for_key};
///
/// assert_eq!(action_for_key("h", Phase::PlayerTurn), Some(Action::Hit));
/// assert_eq!(action_for_key("", Phase::RoundEnd), Some(Action::Advance));
/// assert_eq!(action_for_key("x", Phase::PlayerTurn), None);
/// ```
#[must_use]
pub fn action_for_key(key: &str, phase: Phase) -> Option<Action> {
    let trimmed = key.trim();

    if matches!(trimmed, "q" | "Q" | "quit" | "ctrl+c") {
        return Some(Action::Quit);
    }
    if phase.is_automatic() {
        return Some(Action::Tick);
    }

    match trimmed {
        "h" | "H" | "hit" => Some(Action::Hit),
        "s" | "S" | "stand" => Some(Action::Stand),
        "" | "enter" | "n" | "next" => Some(Action::Advance),
        _ => None,
    }
}
