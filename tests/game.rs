//! Game integration tests.

use bjtable::input::action_for_key;
use bjtable::{
    Action, Card, ConfigError, Deck, EmptyShoePolicy, Flow, Game, GameError, GameOptions, Outcome,
    Phase, Suit, TieRule,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn game_with_draws(options: GameOptions, draws: &[Card]) -> Game {
    Game::with_deck(options, Deck::stacked(draws)).unwrap()
}

fn step(game: &mut Game, action: Action) {
    assert_eq!(game.apply(action).unwrap(), Flow::Continue);
}

#[test]
fn new_game_starts_in_deal_with_shuffled_deck() {
    let game = Game::new(GameOptions::default().with_players(4).with_rounds(5), 1).unwrap();

    assert_eq!(game.phase(), Phase::Deal);
    assert_eq!(game.current_round(), 1);
    assert_eq!(game.number_of_rounds(), 5);
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.players().len(), 4);
    assert_eq!(game.players()[0].name(), "Player 1");
    assert_eq!(game.players()[3].name(), "Player 4");
    assert_eq!(game.dealer().name(), "Dealer");
    assert_eq!(game.cards_remaining(), 52);
    assert!(game.history().is_empty());
}

#[test]
fn invalid_configuration_fails_fast() {
    let base = GameOptions::default();

    assert_eq!(
        Game::new(base.clone().with_players(0), 1).unwrap_err(),
        ConfigError::NoPlayers
    );
    assert_eq!(
        Game::new(base.clone().with_rounds(0), 1).unwrap_err(),
        ConfigError::NoRounds
    );
    assert_eq!(
        Game::new(base.clone().with_players(26), 1).unwrap_err(),
        ConfigError::TooManyPlayers {
            requested: 26,
            max: 25
        }
    );
    assert_eq!(
        Game::new(base.clone().with_dealer_stands_on(22), 1).unwrap_err(),
        ConfigError::InvalidDealerThreshold(22)
    );
    assert_eq!(
        Game::new(base.clone().with_dealer_stands_on(1), 1).unwrap_err(),
        ConfigError::InvalidDealerThreshold(1)
    );
    assert!(Game::new(base.with_players(25), 1).is_ok());
}

#[test]
fn deal_gives_two_cards_to_each_player_then_dealer() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, 10),  // player 1
            card(Suit::Spades, 9),   // player 1
            card(Suit::Clubs, 7),    // player 2
            card(Suit::Diamonds, 8), // player 2
            card(Suit::Hearts, 6),   // dealer up
            card(Suit::Spades, 8),   // dealer hole
        ],
    );

    step(&mut game, Action::Tick);

    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.players()[0].score(), 19);
    assert_eq!(game.players()[1].score(), 15);
    assert_eq!(game.dealer().score(), 14);
    assert_eq!(
        game.dealer().cards(),
        &[card(Suit::Hearts, 6), card(Suit::Spades, 8)]
    );
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn bust_advances_to_next_player_and_dealer_draws_to_seventeen() {
    let mut game = game_with_draws(
        GameOptions::default().with_players(2).with_rounds(1),
        &[
            card(Suit::Hearts, 10),  // player 1
            card(Suit::Spades, 9),   // player 1
            card(Suit::Clubs, 7),    // player 2
            card(Suit::Diamonds, 8), // player 2
            card(Suit::Hearts, 6),   // dealer up
            card(Suit::Spades, 8),   // dealer hole
            card(Suit::Clubs, 5),    // player 1 hit
            card(Suit::Diamonds, 2), // dealer draw
            card(Suit::Clubs, 4),    // dealer draw
        ],
    );

    step(&mut game, Action::Tick);
    assert_eq!(game.players()[0].score(), 19);

    step(&mut game, Action::Hit);
    assert_eq!(game.players()[0].score(), 24);
    assert!(game.players()[0].is_bust());
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.phase(), Phase::PlayerTurn);

    step(&mut game, Action::Stand);
    assert_eq!(game.current_player(), 2);
    assert_eq!(game.phase(), Phase::DealerTurn);

    step(&mut game, Action::Tick);
    assert_eq!(game.phase(), Phase::RoundEnd);
    assert_eq!(game.dealer().score(), 20);
    assert_eq!(game.dealer().cards().len(), 4);

    let result = game.round_result().unwrap();
    assert_eq!(result.round, 1);
    assert_eq!(result.dealer_score, 20);
    assert!(!result.dealer_bust);
    assert_eq!(result.players[0].outcome, Outcome::Lose);
    assert_eq!(result.players[1].outcome, Outcome::Lose);
}

#[test]
fn dealer_turn_from_replayed_state() {
    let mut game = game_with_draws(GameOptions::default(), &[]);
    game.set_phase(Phase::DealerTurn);
    game.dealer_mut().set_hand(&[card(Suit::Hearts, 6), card(Suit::Spades, 8)]);
    assert_eq!(game.dealer().score(), 14);

    game.deck_mut().restack(&[
        card(Suit::Hearts, 3),
        card(Suit::Diamonds, 4),
        card(Suit::Clubs, 5),
    ]);

    step(&mut game, Action::Tick);

    assert_eq!(game.dealer().score(), 17);
    assert_eq!(game.dealer().cards().len(), 3);
    assert_eq!(game.cards_remaining(), 2);
    assert_eq!(game.phase(), Phase::RoundEnd);
}

#[test]
fn hit_from_replayed_state_busts_player() {
    let mut game = game_with_draws(GameOptions::default(), &[card(Suit::Clubs, 5)]);
    game.player_mut(0)
        .set_hand(&[card(Suit::Hearts, 10), card(Suit::Spades, 9)]);
    game.set_phase(Phase::PlayerTurn);

    step(&mut game, Action::Hit);

    assert_eq!(game.players()[0].score(), 24);
    assert_eq!(game.current_player(), 1);
}

#[test]
fn dealer_still_plays_when_every_player_busts() {
    let mut game = game_with_draws(
        GameOptions::default().with_players(1),
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Spades, 6),   // player
            card(Suit::Clubs, 2),    // dealer up
            card(Suit::Diamonds, 3), // dealer hole
            card(Suit::Hearts, 13),  // player hit
            card(Suit::Spades, 10),  // dealer draw
            card(Suit::Clubs, 5),    // dealer draw
        ],
    );

    step(&mut game, Action::Tick);
    step(&mut game, Action::Hit);
    assert_eq!(game.players()[0].score(), 26);
    assert_eq!(game.phase(), Phase::DealerTurn);

    step(&mut game, Action::Tick);
    assert_eq!(game.dealer().cards().len(), 4);
    assert_eq!(game.dealer().score(), 20);
    assert_eq!(
        game.round_result().unwrap().players[0].outcome,
        Outcome::Lose
    );
}

#[test]
fn higher_score_wins_and_tie_goes_to_dealer() {
    let mut game = game_with_draws(
        GameOptions::default().with_players(2),
        &[
            card(Suit::Hearts, 10),  // player 1
            card(Suit::Spades, 13),  // player 1: 20
            card(Suit::Clubs, 1),    // player 2
            card(Suit::Diamonds, 12), // player 2: 21
            card(Suit::Hearts, 1),   // dealer up
            card(Suit::Spades, 9),   // dealer hole: 20
        ],
    );

    step(&mut game, Action::Tick);
    step(&mut game, Action::Stand);
    step(&mut game, Action::Stand);
    step(&mut game, Action::Tick);

    let result = game.round_result().unwrap();
    assert_eq!(result.dealer_score, 20);
    assert_eq!(result.players[0].score, 20);
    assert_eq!(result.players[0].outcome, Outcome::Lose);
    assert_eq!(result.players[1].score, 21);
    assert_eq!(result.players[1].outcome, Outcome::Win);
    assert_eq!(result.count(Outcome::Win), 1);
}

#[test]
fn push_rule_settles_ties_as_push() {
    let mut game = game_with_draws(
        GameOptions::default()
            .with_players(1)
            .with_tie_rule(TieRule::Push),
        &[
            card(Suit::Clubs, 1),     // player
            card(Suit::Diamonds, 12), // player: 21
            card(Suit::Hearts, 1),    // dealer up
            card(Suit::Spades, 11),   // dealer hole: 21
        ],
    );

    step(&mut game, Action::Tick);
    step(&mut game, Action::Stand);
    step(&mut game, Action::Tick);

    assert_eq!(
        game.round_result().unwrap().players[0].outcome,
        Outcome::Push
    );
}

#[test]
fn settlement_rules() {
    let rule = TieRule::DealerWins;
    assert_eq!(Outcome::settle(20, 19, rule), Outcome::Win);
    assert_eq!(Outcome::settle(19, 20, rule), Outcome::Lose);
    assert_eq!(Outcome::settle(18, 23, rule), Outcome::Win);
    assert_eq!(Outcome::settle(22, 17, rule), Outcome::Lose);
    assert_eq!(Outcome::settle(22, 25, rule), Outcome::Lose);
    assert_eq!(Outcome::settle(21, 21, rule), Outcome::Lose);
    assert_eq!(Outcome::settle(21, 21, TieRule::Push), Outcome::Push);
    assert_eq!(Outcome::settle(22, 22, TieRule::Push), Outcome::Lose);
}

#[test]
fn rounds_roll_over_into_game_over() {
    let mut game = Game::new(GameOptions::default().with_players(2).with_rounds(2), 3).unwrap();
    let mut deals = 0;

    while !game.is_over() {
        let action = match game.phase() {
            Phase::Deal => {
                deals += 1;
                Action::Tick
            }
            Phase::PlayerTurn => Action::Stand,
            Phase::RoundEnd => Action::Advance,
            Phase::DealerTurn | Phase::GameOver => Action::Tick,
        };
        step(&mut game, action);

        if game.phase() == Phase::Deal {
            assert_eq!(game.cards_remaining(), 52);
            assert_eq!(game.current_player(), 0);
        }
    }

    assert_eq!(deals, 2);
    assert_eq!(game.current_round(), 3);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.history()[1].round, 2);
    assert!(game.round_result().is_some());

    for action in [Action::Tick, Action::Advance, Action::Hit, Action::Stand] {
        step(&mut game, action);
        assert_eq!(game.phase(), Phase::GameOver);
    }
    assert_eq!(game.apply(Action::Quit).unwrap(), Flow::Exit);
}

#[test]
fn quit_exits_from_any_phase_without_transition() {
    let mut game = Game::new(GameOptions::default().with_rounds(1), 11).unwrap();
    assert_eq!(game.apply(Action::Quit).unwrap(), Flow::Exit);
    assert_eq!(game.phase(), Phase::Deal);

    step(&mut game, Action::Tick);
    assert_eq!(game.apply(Action::Quit).unwrap(), Flow::Exit);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.current_player(), 0);
}

#[test]
fn actions_outside_their_phase_are_ignored() {
    let mut game = game_with_draws(
        GameOptions::default().with_players(1),
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 7),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
        ],
    );

    step(&mut game, Action::Tick);
    step(&mut game, Action::Advance);
    step(&mut game, Action::Tick);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.players()[0].cards().len(), 2);

    step(&mut game, Action::Stand);
    step(&mut game, Action::Tick);
    assert_eq!(game.phase(), Phase::RoundEnd);

    step(&mut game, Action::Hit);
    step(&mut game, Action::Stand);
    step(&mut game, Action::Tick);
    assert_eq!(game.phase(), Phase::RoundEnd);
    assert_eq!(game.current_round(), 1);
}

#[test]
fn halt_policy_reports_empty_shoe() {
    let options = GameOptions::default()
        .with_players(1)
        .with_empty_shoe(EmptyShoePolicy::Halt);
    let mut game = game_with_draws(
        options.clone(),
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 6),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 8),
        ],
    );

    step(&mut game, Action::Tick);
    assert_eq!(game.apply(Action::Hit).unwrap_err(), GameError::ShoeEmpty);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.players()[0].cards().len(), 2);
    assert_eq!(game.players()[0].score(), 16);

    let mut empty = Game::with_deck(options, Deck::new(5)).unwrap();
    assert_eq!(empty.apply(Action::Tick).unwrap_err(), GameError::ShoeEmpty);
    assert_eq!(empty.phase(), Phase::Deal);
}

#[test]
fn reshuffle_policy_keeps_dealing() {
    let mut game = game_with_draws(
        GameOptions::default().with_players(1),
        &[
            card(Suit::Hearts, 2),
            card(Suit::Spades, 3),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 8),
        ],
    );

    step(&mut game, Action::Tick);
    step(&mut game, Action::Hit);

    assert_eq!(game.players()[0].cards().len(), 3);
    assert_eq!(game.cards_remaining(), 51);
}

#[test]
fn same_seed_plays_the_same_game() {
    let mut first = Game::new(GameOptions::default(), 99).unwrap();
    let mut second = Game::new(GameOptions::default(), 99).unwrap();

    for action in [Action::Tick, Action::Hit, Action::Stand, Action::Stand] {
        let _ = first.apply(action).unwrap();
        let _ = second.apply(action).unwrap();
        assert_eq!(first.view(), second.view());
    }
}

#[test]
fn view_hides_hole_card_until_dealer_turn() {
    let mut game = game_with_draws(
        GameOptions::default().with_players(1),
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 8),
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 9), // dealer hole
        ],
    );

    let view = game.view();
    assert!(view.hole_hidden);
    assert!(view.dealer.cards.is_empty());
    assert_eq!(view.hidden_cards, 0);

    step(&mut game, Action::Tick);
    let view = game.view();
    assert_eq!(view.phase, Phase::PlayerTurn);
    assert!(view.hole_hidden);
    assert_eq!(view.dealer.cards, vec![card(Suit::Clubs, 9)]);
    assert_eq!(view.dealer.score, None);
    assert_eq!(view.hidden_cards, 1);
    assert_eq!(view.players[0].score, Some(18));
    assert_eq!(view.acting_player().unwrap().name, "Player 1");
    assert!(view.result.is_none());

    step(&mut game, Action::Stand);
    step(&mut game, Action::Tick);
    let view = game.view();
    assert_eq!(view.phase, Phase::RoundEnd);
    assert!(!view.hole_hidden);
    assert_eq!(view.dealer.cards.len(), 2);
    assert_eq!(view.dealer.score, Some(18));
    assert!(view.acting_player().is_none());
    assert_eq!(view.result.unwrap().players[0].outcome, Outcome::Lose);
}

#[test]
fn view_clamps_round_after_game_over() {
    let mut game = Game::new(GameOptions::default().with_players(1).with_rounds(1), 4).unwrap();
    step(&mut game, Action::Tick);
    step(&mut game, Action::Stand);
    step(&mut game, Action::Tick);
    step(&mut game, Action::Advance);

    let view = game.view();
    assert_eq!(view.phase, Phase::GameOver);
    assert_eq!(view.current_round, 2);
    assert_eq!(view.display_round(), 1);
    assert!(!view.hole_hidden);
}

#[test]
#[should_panic(expected = "contradicts round")]
fn set_phase_rejects_game_over_mid_session() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();
    game.set_phase(Phase::GameOver);
}

#[test]
fn key_bindings() {
    assert_eq!(action_for_key("h", Phase::PlayerTurn), Some(Action::Hit));
    assert_eq!(action_for_key("s\n", Phase::PlayerTurn), Some(Action::Stand));
    assert_eq!(action_for_key("q", Phase::PlayerTurn), Some(Action::Quit));
    assert_eq!(action_for_key("ctrl+c", Phase::GameOver), Some(Action::Quit));
    assert_eq!(action_for_key(" ", Phase::RoundEnd), Some(Action::Advance));
    assert_eq!(action_for_key("", Phase::RoundEnd), Some(Action::Advance));
    assert_eq!(action_for_key("", Phase::Deal), Some(Action::Tick));
    assert_eq!(action_for_key("h", Phase::DealerTurn), Some(Action::Tick));
    assert_eq!(action_for_key("x", Phase::PlayerTurn), None);
}
