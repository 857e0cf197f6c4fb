//! American roulette.
//!
//! The wheel has 38 pockets: 1..=36, 0 and 00. 0 and 00 are green; otherwise odd numbers are
//! red and even numbers black.
//!
//! One spin per visit. The player places a wager, picks a bet type, then the bet detail:
//! - `number`: a comma-separated list of pockets (duplicates ignored). Covering `n` pockets
//!   and hitting pays `wager + round(wager * (38 - n) / 38)`.
//! - `color`: `red` or `black` pays 2x on a hit; `green` pays 36x.
//!
//! A miss pays nothing. The program completes after the payout.

use super::{
    logging::format_coins,
    payout::{clamp_i64, round_half_even, Multiplier},
    wager,
};
use crate::program::{Program, ProgramError, Table};
use gamblesim_types::ROULETTE_POCKETS;
use std::fmt;
use tracing::debug;

const GAME: &str = "roulette";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
    Green,
}

impl Color {
    pub fn parse(input: &str) -> Option<Color> {
        match input.trim().to_ascii_lowercase().as_str() {
            "red" => Some(Color::Red),
            "black" => Some(Color::Black),
            "green" => Some(Color::Green),
            _ => None,
        }
    }

    /// Payout multiplier on a hit.
    pub fn multiplier(self) -> Multiplier {
        match self {
            Color::Red | Color::Black => Multiplier::whole(2),
            Color::Green => Multiplier::whole(36),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "red",
            Color::Black => "black",
            Color::Green => "green",
        })
    }
}

/// A pocket on the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pocket {
    /// 0..=36.
    Number(u8),
    DoubleZero,
}

impl Pocket {
    /// Maps a wheel index (`0..38`) to its pocket: 1..=36, then 0, then 00.
    pub fn from_index(index: usize) -> Pocket {
        match index % ROULETTE_POCKETS {
            36 => Pocket::Number(0),
            37 => Pocket::DoubleZero,
            other => Pocket::Number(other as u8 + 1),
        }
    }

    /// Parses a pocket label: `0`..`36` or `00`.
    pub fn parse(input: &str) -> Option<Pocket> {
        let label = input.trim();
        if label == "00" {
            return Some(Pocket::DoubleZero);
        }
        match label.parse::<u8>() {
            Ok(number) if number <= 36 => Some(Pocket::Number(number)),
            _ => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Pocket::Number(0) | Pocket::DoubleZero => Color::Green,
            Pocket::Number(n) if n % 2 == 1 => Color::Red,
            Pocket::Number(_) => Color::Black,
        }
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pocket::Number(n) => write!(f, "{n}"),
            Pocket::DoubleZero => f.write_str("00"),
        }
    }
}

/// Parses a comma-separated pocket list, dropping duplicates. Returns `None` if any entry is
/// invalid or the list is empty.
pub fn parse_pockets(input: &str) -> Option<Vec<Pocket>> {
    let mut pockets = Vec::new();
    for label in input.split(',') {
        let pocket = Pocket::parse(label)?;
        if !pockets.contains(&pocket) {
            pockets.push(pocket);
        }
    }
    (!pockets.is_empty()).then_some(pockets)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bet {
    Numbers(Vec<Pocket>),
    Color(Color),
}

impl Bet {
    /// Payout for `wager` when the ball lands in `result`.
    pub fn payout(&self, wager: u64, result: Pocket) -> i64 {
        match self {
            Bet::Numbers(pockets) if pockets.contains(&result) => {
                let uncovered = ROULETTE_POCKETS.saturating_sub(pockets.len()) as u128;
                let bonus = round_half_even(
                    u128::from(wager) * uncovered,
                    ROULETTE_POCKETS as u128,
                );
                clamp_i64(u128::from(wager) + bonus)
            }
            Bet::Color(color) if result.color() == *color => color.multiplier().apply(wager),
            _ => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    AwaitingWager,
    AwaitingBetType,
    AwaitingNumbers,
    AwaitingColor,
    Settled,
}

/// Roulette program.
#[derive(Debug)]
pub struct Roulette {
    stage: Stage,
    wager: u64,
    bet: Option<Bet>,
    result: Option<Pocket>,
}

impl Default for Roulette {
    fn default() -> Self {
        Self::new()
    }
}

impl Roulette {
    pub fn new() -> Self {
        Self {
            stage: Stage::AwaitingWager,
            wager: 0,
            bet: None,
            result: None,
        }
    }

    pub fn bet(&self) -> Option<&Bet> {
        self.bet.as_ref()
    }

    pub fn result(&self) -> Option<Pocket> {
        self.result
    }

    fn prompt_bet_type(table: &mut Table<'_>) {
        table
            .out
            .prompt("Bet on a 'number' or a 'color'? ");
    }

    fn prompt_numbers(table: &mut Table<'_>) {
        table
            .out
            .prompt("Which numbers? (0-36 or 00, separated by commas): ");
    }

    fn prompt_color(table: &mut Table<'_>) {
        table.out.prompt("Which color? (red, black or green): ");
    }

    fn spin(&mut self, table: &mut Table<'_>, bet: Bet) -> Result<bool, ProgramError> {
        let result = Pocket::from_index(table.rng.draw(ROULETTE_POCKETS));
        let payout = bet.payout(self.wager, result);
        debug!(?bet, %result, payout, "wheel stopped");

        table.out.say("The wheel spins...");
        table
            .out
            .say(format!("The ball lands on {} {}!", result.color(), result));
        if payout == 0 {
            table.out.say("No luck this time.");
        }
        self.bet = Some(bet);
        self.result = Some(result);
        self.stage = Stage::Settled;
        wager::settle(table, GAME, self.wager, payout)?;
        Ok(true)
    }
}

impl Program for Roulette {
    fn execute(&mut self, table: &mut Table<'_>) -> Result<bool, ProgramError> {
        table.out.say("Welcome to Roulette!");
        table.out.say(format!(
            "You have {} coins.",
            format_coins(table.player.coins())
        ));
        table.out.prompt("How much would you like to bet? ");
        Ok(false)
    }

    fn process_input(&mut self, table: &mut Table<'_>, input: &str) -> Result<bool, ProgramError> {
        match self.stage {
            Stage::AwaitingWager => {
                match wager::take_wager(table, GAME, input) {
                    Some(bet) => {
                        self.wager = bet;
                        self.stage = Stage::AwaitingBetType;
                        Self::prompt_bet_type(table);
                    }
                    None => table.out.prompt("How much would you like to bet? "),
                }
                Ok(false)
            }
            Stage::AwaitingBetType => {
                match input.trim().to_ascii_lowercase().as_str() {
                    "number" | "numbers" => {
                        self.stage = Stage::AwaitingNumbers;
                        Self::prompt_numbers(table);
                    }
                    "color" | "colour" => {
                        self.stage = Stage::AwaitingColor;
                        Self::prompt_color(table);
                    }
                    _ => {
                        table.out.say("Please type 'number' or 'color'.");
                        Self::prompt_bet_type(table);
                    }
                }
                Ok(false)
            }
            Stage::AwaitingNumbers => match parse_pockets(input) {
                Some(pockets) => self.spin(table, Bet::Numbers(pockets)),
                None => {
                    table.out.say("Those aren't numbers on the wheel.");
                    Self::prompt_numbers(table);
                    Ok(false)
                }
            },
            Stage::AwaitingColor => match Color::parse(input) {
                Some(color) => self.spin(table, Bet::Color(color)),
                None => {
                    table.out.say("That isn't a color on the wheel.");
                    Self::prompt_color(table);
                    Ok(false)
                }
            },
            // The runner never feeds a completed program.
            Stage::Settled => Err(ProgramError::AlreadyCompleted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::{mocks::ScriptedDraws, transcript::Transcript};
    use gamblesim_types::PlayerData;

    /// Wheel index of 0.
    const ZERO: usize = 36;
    /// Wheel index of 00.
    const DOUBLE_ZERO: usize = 37;

    fn play(draws: &[usize], inputs: &[&str]) -> (Roulette, u64, Vec<bool>, Transcript) {
        let mut player = PlayerData::new();
        let mut rng = ScriptedDraws::new(draws.iter().copied());
        let mut out = Transcript::default();
        let mut game = Roulette::new();
        let mut table = Table {
            player: &mut player,
            rng: &mut rng,
            out: &mut out,
        };
        assert!(!game.execute(&mut table).unwrap());
        let done = inputs
            .iter()
            .map(|input| game.process_input(&mut table, input).unwrap())
            .collect();
        (game, player.coins(), done, out)
    }

    #[test]
    fn test_wheel_layout() {
        assert_eq!(Pocket::from_index(0), Pocket::Number(1));
        assert_eq!(Pocket::from_index(35), Pocket::Number(36));
        assert_eq!(Pocket::from_index(ZERO), Pocket::Number(0));
        assert_eq!(Pocket::from_index(DOUBLE_ZERO), Pocket::DoubleZero);
        let greens = (0..ROULETTE_POCKETS)
            .filter(|i| Pocket::from_index(*i).color() == Color::Green)
            .count();
        let reds = (0..ROULETTE_POCKETS)
            .filter(|i| Pocket::from_index(*i).color() == Color::Red)
            .count();
        assert_eq!(greens, 2);
        assert_eq!(reds, 18);
        assert_eq!(Pocket::Number(7).color(), Color::Red);
        assert_eq!(Pocket::Number(8).color(), Color::Black);
    }

    #[test]
    fn test_parse_pockets() {
        assert_eq!(
            parse_pockets("1, 2,00,2"),
            Some(vec![Pocket::Number(1), Pocket::Number(2), Pocket::DoubleZero])
        );
        assert_eq!(parse_pockets("0"), Some(vec![Pocket::Number(0)]));
        assert_eq!(parse_pockets("37"), None);
        assert_eq!(parse_pockets("1,,2"), None);
        assert_eq!(parse_pockets("seven"), None);
        assert_eq!(parse_pockets(""), None);
    }

    #[test]
    fn test_number_payouts() {
        let single = Bet::Numbers(vec![Pocket::Number(17)]);
        // 100 + round(100 * 37 / 38) = 100 + 97
        assert_eq!(single.payout(100, Pocket::Number(17)), 197);
        assert_eq!(single.payout(100, Pocket::Number(18)), 0);

        let half: Vec<Pocket> = (1..=19).map(Pocket::Number).collect();
        // 100 + 100 * 19 / 38 = 150
        assert_eq!(Bet::Numbers(half).payout(100, Pocket::Number(5)), 150);

        let all: Vec<Pocket> = (0..ROULETTE_POCKETS).map(Pocket::from_index).collect();
        assert_eq!(Bet::Numbers(all).payout(100, Pocket::DoubleZero), 100);
    }

    #[test]
    fn test_color_payouts() {
        assert_eq!(Bet::Color(Color::Red).payout(100, Pocket::Number(3)), 200);
        assert_eq!(Bet::Color(Color::Black).payout(100, Pocket::Number(3)), 0);
        assert_eq!(Bet::Color(Color::Green).payout(100, Pocket::DoubleZero), 3_600);
        assert_eq!(Bet::Color(Color::Green).payout(100, Pocket::Number(0)), 3_600);
        assert_eq!(Bet::Color(Color::Green).payout(100, Pocket::Number(3)), 0);
        assert_eq!(Bet::Color(Color::Green).payout(100, Pocket::Number(36)), 0);
        assert_eq!(Bet::Color(Color::Red).payout(100, Pocket::Number(0)), 0);
    }

    #[test]
    fn test_green_hit_pays_thirty_six() {
        let (game, coins, done, out) = play(&[DOUBLE_ZERO], &["100", "color", "green"]);
        assert_eq!(done, vec![false, false, true]);
        assert_eq!(game.result(), Some(Pocket::DoubleZero));
        assert_eq!(coins, 1_000 - 100 + 3_600);
        assert!(out.contains("green 00"));
    }

    #[test]
    fn test_number_miss() {
        // Index 4 is pocket 5.
        let (game, coins, _, out) = play(&[4], &["100", "number", "1,2,3"]);
        assert_eq!(game.result(), Some(Pocket::Number(5)));
        assert_eq!(coins, 900);
        assert!(out.contains("No luck"));
    }

    #[test]
    fn test_invalid_inputs_reprompt() {
        let (game, coins, done, _) = play(&[0], &["", "100", "corner", "number", "99", "1"]);
        assert_eq!(done, vec![false, false, false, false, false, true]);
        assert_eq!(game.bet(), Some(&Bet::Numbers(vec![Pocket::Number(1)])));
        assert_eq!(coins, 1_000 - 100 + 197);
    }

    #[test]
    fn test_invalid_color_reprompts() {
        let (_, coins, done, out) = play(&[1], &["50", "COLOR", "purple", "Black"]);
        assert_eq!(done, vec![false, false, false, true]);
        assert!(out.contains("isn't a color"));
        // Pocket 2 is black.
        assert_eq!(coins, 1_050);
    }

    proptest! {
        #[test]
        fn prop_number_hit_pays_between_one_and_two_times(
            wager in 1u64..1_000_000,
            indices in proptest::collection::vec(0..ROULETTE_POCKETS, 1..ROULETTE_POCKETS),
            pick in any::<proptest::sample::Index>(),
        ) {
            let mut pockets = Vec::new();
            for index in indices {
                let pocket = Pocket::from_index(index);
                if !pockets.contains(&pocket) {
                    pockets.push(pocket);
                }
            }
            let result = pockets[pick.index(pockets.len())];
            let payout = Bet::Numbers(pockets).payout(wager, result);
            prop_assert!(payout >= wager as i64);
            prop_assert!(payout <= 2 * wager as i64);
        }

        #[test]
        fn prop_number_miss_pays_nothing(wager in 1u64..1_000_000, covered in 0..37usize) {
            let pockets: Vec<Pocket> = (0..=covered).map(Pocket::from_index).collect();
            let miss = Pocket::from_index(37);
            prop_assert_eq!(Bet::Numbers(pockets).payout(wager, miss), 0);
        }
    }
}
