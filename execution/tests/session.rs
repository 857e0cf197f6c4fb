//! End-to-end sessions driven line by line through the dispatcher.

use gamblesim_execution::{mocks::ScriptedDraws, Casino, CasinoRng, Flow, GameState};
use gamblesim_types::{ItemKind, PlayerData};

fn scripted(coins: u64, draws: &[usize]) -> Casino<ScriptedDraws> {
    let mut casino = Casino::new(
        PlayerData::with_coins(coins),
        ScriptedDraws::new(draws.iter().copied()),
    )
    .with_logo(false);
    assert_eq!(casino.start().unwrap(), Flow::Continue);
    casino
}

/// Feeds every line, asserting the session keeps going, and returns the flow of the last.
fn feed<R: gamblesim_execution::RandomSource>(casino: &mut Casino<R>, lines: &[&str]) -> Flow {
    let mut flow = Flow::Continue;
    for (idx, line) in lines.iter().enumerate() {
        flow = casino.process_input(line).unwrap();
        if idx + 1 < lines.len() {
            assert_eq!(flow, Flow::Continue, "session ended early at {line:?}");
        }
    }
    flow
}

#[test]
fn test_slots_then_quit() {
    // seven, cherries, gem: no match returns half the bet.
    let mut casino = scripted(1_000, &[0, 1, 9]);
    assert_eq!(feed(&mut casino, &["slots", "100"]), Flow::Continue);
    assert_eq!(casino.state(), GameState::Minigame);
    assert_eq!(casino.player().coins(), 950);

    assert_eq!(feed(&mut casino, &["stop"]), Flow::Continue);
    assert_eq!(casino.state(), GameState::Menu);
    assert!(casino.transcript().contains("Coin total: 950"));
    assert_eq!(feed(&mut casino, &["quit"]), Flow::Quit);
}

#[test]
fn test_full_tour() {
    let draws = [
        // roulette: 00
        37,
        // blackjack: dealer 10+7, player 10+6, hit 10 -> bust
        9, 6, 9, 5, 9,
    ];
    let mut casino = scripted(1_000, &draws);

    feed(&mut casino, &["roulette", "100", "color", "green"]);
    assert_eq!(casino.state(), GameState::Menu);
    assert_eq!(casino.player().coins(), 4_500);

    feed(&mut casino, &["blackjack", "500", "hit"]);
    assert_eq!(casino.state(), GameState::Menu);
    assert_eq!(casino.player().coins(), 4_000);

    // The car is out of reach; rent is not.
    feed(&mut casino, &["store", "2008 honda civic", "rent", "exit"]);
    assert!(!casino.player().inventory.contains(ItemKind::HondaCivic));
    assert!(casino.player().inventory.contains(ItemKind::Rent));
    assert_eq!(casino.player().coins(), 3_330);

    assert_eq!(feed(&mut casino, &["QUIT"]), Flow::Quit);
}

#[test]
fn test_broke_player_can_take_a_loan() {
    let mut casino = scripted(0, &[]);
    assert!(casino.transcript().contains("you're broke"));
    feed(&mut casino, &["slots", "10", "stop"]);
    assert_eq!(casino.player().coins(), 0);

    feed(&mut casino, &["store", "predatory loan", "exit"]);
    assert_eq!(casino.player().coins(), 2_500);
    assert!(casino.player().inventory.contains(ItemKind::PredatoryLoan));
}

#[test]
fn test_loan_at_largest_starting_balance() {
    let coins = i64::MAX as u64;
    let mut casino = scripted(coins, &[]);
    feed(&mut casino, &["store", "predatory loan", "exit"]);
    assert_eq!(casino.player().coins(), coins + 2_500);
    assert_eq!(casino.state(), GameState::Menu);
}

#[test]
fn test_input_is_trimmed() {
    let mut casino = scripted(1_000, &[]);
    feed(&mut casino, &["  store\r", " groceries ", "exit  "]);
    assert_eq!(casino.player().coins(), 970);
    assert_eq!(casino.state(), GameState::Menu);
}

#[test]
fn test_seeded_sessions_replay() {
    let run = |seed: u64| {
        let mut casino = Casino::new(PlayerData::new(), CasinoRng::seeded(seed)).with_logo(false);
        casino.start().unwrap();
        feed(&mut casino, &["slots", "10", "10", "10", "stop", "roulette", "25", "color", "red"]);
        (casino.player().coins(), casino.transcript().render())
    };
    assert_eq!(run(99), run(99));
}
