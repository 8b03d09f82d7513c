//! Terminal blackjack table.

use core::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::input::action_for_key;
use bjtable::{
    Action, Card, EmptyShoePolicy, Flow, Game, GameOptions, Outcome, Phase, SeatView, TableView,
    TieRule,
};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bjtable")]
#[command(about = "Play single-table blackjack in the terminal")]
struct Args {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 2)]
    players: u8,

    /// Number of rounds to play
    #[arg(short, long, default_value_t = 3)]
    rounds: u32,

    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Settle equal scores as a push instead of a dealer win
    #[arg(long)]
    push_on_tie: bool,

    /// Stop with an error instead of reshuffling when the deck runs out
    #[arg(long)]
    halt_on_empty_shoe: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> GameOptions {
        let tie_rule = if self.push_on_tie {
            TieRule::Push
        } else {
            TieRule::DealerWins
        };
        let empty_shoe = if self.halt_on_empty_shoe {
            EmptyShoePolicy::Halt
        } else {
            EmptyShoePolicy::Reshuffle
        };

        GameOptions::default()
            .with_players(self.players)
            .with_rounds(self.rounds)
            .with_tie_rule(tie_rule)
            .with_empty_shoe(empty_shoe)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    debug!(seed, "starting table");

    let mut game = Game::new(args.options(), seed)?;
    let mut lines = io::stdin().lock().lines();

    loop {
        let phase = game.phase();
        let action = if phase.is_automatic() {
            Action::Tick
        } else {
            print_table(&game);
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                debug!("input closed");
                return Ok(());
            };
            let line = line?;
            let Some(action) = action_for_key(&line, phase) else {
                println!("Unknown key.");
                continue;
            };
            action
        };

        if game.apply(action)? == Flow::Exit {
            return Ok(());
        }
    }
}

fn print_table(game: &Game) {
    let view = game.view();

    println!();
    println!(
        "{}",
        colorize(
            &format!(
                "Blackjack - Round {}/{}",
                view.display_round(),
                view.number_of_rounds
            ),
            "1;32"
        )
    );
    println!("{}", "-".repeat(55));
    println!("{}", format_dealer_row(&view));
    for player in &view.players {
        println!("{}", format_row(player));
    }
    println!("{}", "-".repeat(55));

    match view.phase {
        Phase::PlayerTurn => {
            if let Some(player) = view.acting_player() {
                println!("{}'s turn: press 'h' to hit, 's' to stand", player.name);
            }
        }
        Phase::RoundEnd => {
            println!("{}", colorize("Round Results:", "1;32"));
            if let Some(result) = &view.result {
                for player in &result.players {
                    println!(
                        "{} {} (Player: {} vs Dealer: {})",
                        player.name,
                        player.outcome.verb(),
                        player.score,
                        result.dealer_score
                    );
                }
            }
            println!("Press Enter to continue");
        }
        Phase::GameOver => {
            println!("{}", colorize("Game Over!", "1;32"));
            print_summary(game);
            println!("Press 'q' to quit");
        }
        Phase::Deal | Phase::DealerTurn => {}
    }
}

fn print_summary(game: &Game) {
    for (seat, player) in game.players().iter().enumerate() {
        let wins = game
            .history()
            .iter()
            .filter(|round| {
                round
                    .players
                    .get(seat)
                    .is_some_and(|p| p.outcome == Outcome::Win)
            })
            .count();
        println!(
            "{}: {wins} of {} rounds won",
            player.name(),
            game.history().len()
        );
    }
}

fn format_dealer_row(view: &TableView) -> String {
    let mut cards = format_cards(&view.dealer.cards);
    if view.hole_hidden && view.hidden_cards > 0 {
        cards.push_str(" [Hidden]");
    }
    format_columns(&view.dealer.name, &cards, view.dealer.score)
}

fn format_row(seat: &SeatView) -> String {
    format_columns(&seat.name, &format_cards(&seat.cards), seat.score)
}

fn format_columns(name: &str, cards: &str, score: Option<u8>) -> String {
    let score = score.map_or_else(String::new, |s| format!("(Score: {s})"));
    let label = format!("{name}:");
    // Pad on the visible width; ANSI escapes are not counted.
    let padding = 30_usize.saturating_sub(visible_width(cards));
    format!("{label:<10}{cards}{}{score:>12}", " ".repeat(padding))
}

fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for ch in text.chars() {
        match (in_escape, ch) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (false, _) => width += 1,
            (true, _) => {}
        }
    }
    width
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.suit.is_red() { "1;31" } else { "1;34" };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
