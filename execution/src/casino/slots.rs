//! Slot machine.
//!
//! Three reels, each landing uniformly on one of 21 faces:
//! - face 0: seven
//! - faces 1..=8: fruit (cherries, lemon, watermelon, banana; two faces each)
//! - faces 9..=14: luck (gem, bell, BAR; two faces each)
//! - faces 15..=20: skull
//!
//! The line is scored by symbol, then by the symbol's tier:
//!
//! | line        | pair | triple |
//! |-------------|------|--------|
//! | no match    | 1/2  |   -    |
//! | fruit       | 3/2  |   2    |
//! | luck        | 7/4  |  5/2   |
//! | skull       | 3/2  |   0    |
//! | seven       | 3/2  |  10    |
//!
//! Multipliers include the stake. The machine keeps taking bets until the player types
//! `stop`, even at zero coins.

use super::{logging::format_coins, payout::Multiplier, wager};
use crate::program::{Program, ProgramError, Table};
use gamblesim_types::SLOT_REEL_FACES;
use std::fmt;
use tracing::debug;

const GAME: &str = "slots";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Seven,
    Cherries,
    Lemon,
    Watermelon,
    Banana,
    Gem,
    Bell,
    Bar,
    Skull,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Seven,
    Fruit,
    Luck,
    Skull,
}

impl Symbol {
    /// Maps a reel face (`0..21`) to its symbol.
    pub fn from_face(face: usize) -> Symbol {
        match face % SLOT_REEL_FACES {
            0 => Symbol::Seven,
            1 | 2 => Symbol::Cherries,
            3 | 4 => Symbol::Lemon,
            5 | 6 => Symbol::Watermelon,
            7 | 8 => Symbol::Banana,
            9 | 10 => Symbol::Gem,
            11 | 12 => Symbol::Bell,
            13 | 14 => Symbol::Bar,
            _ => Symbol::Skull,
        }
    }

    pub fn tier(self) -> Tier {
        match self {
            Symbol::Seven => Tier::Seven,
            Symbol::Cherries | Symbol::Lemon | Symbol::Watermelon | Symbol::Banana => Tier::Fruit,
            Symbol::Gem | Symbol::Bell | Symbol::Bar => Tier::Luck,
            Symbol::Skull => Tier::Skull,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Symbol::Seven => " 7 ",
            Symbol::Cherries => "🍒 ",
            Symbol::Lemon => "🍋 ",
            Symbol::Watermelon => "🍉 ",
            Symbol::Banana => "🍌 ",
            Symbol::Gem => "💎 ",
            Symbol::Bell => "🔔 ",
            Symbol::Bar => "BAR",
            Symbol::Skull => "💀 ",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbol::Seven => "seven",
            Symbol::Cherries => "cherries",
            Symbol::Lemon => "lemon",
            Symbol::Watermelon => "watermelon",
            Symbol::Banana => "banana",
            Symbol::Gem => "gem",
            Symbol::Bell => "bell",
            Symbol::Bar => "BAR",
            Symbol::Skull => "skull",
        };
        f.write_str(name)
    }
}

/// How a spin lined up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Nothing,
    Pair(Symbol),
    Triple(Symbol),
}

impl Line {
    pub fn of(reels: [Symbol; 3]) -> Line {
        let [a, b, c] = reels;
        if a == b && b == c {
            Line::Triple(a)
        } else if a == b || a == c {
            Line::Pair(a)
        } else if b == c {
            Line::Pair(b)
        } else {
            Line::Nothing
        }
    }

    pub fn multiplier(self) -> Multiplier {
        match self {
            Line::Nothing => Multiplier::ratio(1, 2),
            Line::Pair(symbol) => match symbol.tier() {
                Tier::Luck => Multiplier::ratio(7, 4),
                Tier::Fruit | Tier::Skull | Tier::Seven => Multiplier::ratio(3, 2),
            },
            Line::Triple(symbol) => match symbol.tier() {
                Tier::Fruit => Multiplier::whole(2),
                Tier::Luck => Multiplier::ratio(5, 2),
                Tier::Skull => Multiplier::ZERO,
                Tier::Seven => Multiplier::whole(10),
            },
        }
    }

    fn describe(self) -> String {
        match self {
            Line::Nothing => "No match. Half your bet comes back.".to_string(),
            Line::Pair(symbol) => format!("A pair of {symbol}!"),
            Line::Triple(Symbol::Skull) => "Three skulls... the house takes it all.".to_string(),
            Line::Triple(Symbol::Seven) => "JACKPOT! Three sevens!".to_string(),
            Line::Triple(symbol) => format!("Three {symbol}!"),
        }
    }
}

/// Slot machine program.
#[derive(Debug, Default)]
pub struct Slots {
    spins: u64,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spins(&self) -> u64 {
        self.spins
    }

    fn prompt(table: &mut Table<'_>) {
        table
            .out
            .prompt("Enter a bet to spin, or 'stop' to leave: ");
    }

    fn spin(table: &mut Table<'_>) -> [Symbol; 3] {
        [0; 3].map(|_| Symbol::from_face(table.rng.draw(SLOT_REEL_FACES)))
    }

    fn render(table: &mut Table<'_>, reels: [Symbol; 3]) {
        table.out.say("+-----+-----+-----+");
        table.out.say(format!(
            "| {} | {} | {} |",
            reels[0].glyph(),
            reels[1].glyph(),
            reels[2].glyph()
        ));
        table.out.say("+-----+-----+-----+");
    }
}

impl Program for Slots {
    fn execute(&mut self, table: &mut Table<'_>) -> Result<bool, ProgramError> {
        table.out.say("Welcome to Slots!");
        table.out.say(format!(
            "You have {} coins.",
            format_coins(table.player.coins())
        ));
        Self::prompt(table);
        Ok(false)
    }

    fn process_input(&mut self, table: &mut Table<'_>, input: &str) -> Result<bool, ProgramError> {
        if input.trim().eq_ignore_ascii_case("stop") {
            table.out.say("OK, goodbye!");
            return Ok(true);
        }

        let Some(bet) = wager::take_wager(table, GAME, input) else {
            Self::prompt(table);
            return Ok(false);
        };

        let reels = Self::spin(table);
        let line = Line::of(reels);
        self.spins += 1;
        debug!(?reels, ?line, "reels stopped");

        Self::render(table, reels);
        table.out.say(line.describe());
        wager::settle(table, GAME, bet, line.multiplier().apply(bet))?;
        if table.player.coins() == 0 {
            table
                .out
                .say("You're out of coins. Type 'stop' to head back to the menu.");
        }
        Self::prompt(table);
        Ok(false)
    }
}
