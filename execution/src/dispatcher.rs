//! Session dispatcher.
//!
//! [Casino] owns the player's data and exactly one active program at a time, routes every
//! input line to it, and swaps programs when the active one completes:
//! - a completed menu starts the selected minigame or the store, or ends the session on QUIT;
//! - any other completed program returns to a fresh menu.
//!
//! A program that completes inside `begin` is handled by the same rule before control
//! returns to the host.

use crate::{
    casino::{
        blackjack::Blackjack,
        menu::{MainMenu, MenuSelection},
        roulette::Roulette,
        slots::Slots,
        store::Store,
    },
    program::{ProgramError, Runner, Table},
    rng::RandomSource,
    transcript::{Entry, Transcript},
};
use gamblesim_types::PlayerData;
use tracing::{debug, info};

/// Which kind of screen is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Minigame,
    Store,
}

/// Whether the host should keep feeding input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The single active program.
#[derive(Debug)]
pub enum ActiveProgram {
    Menu(Runner<MainMenu>),
    Slots(Runner<Slots>),
    Blackjack(Runner<Blackjack>),
    Roulette(Runner<Roulette>),
    Store(Runner<Store>),
}

impl ActiveProgram {
    pub fn state(&self) -> GameState {
        match self {
            ActiveProgram::Menu(_) => GameState::Menu,
            ActiveProgram::Slots(_) | ActiveProgram::Blackjack(_) | ActiveProgram::Roulette(_) => {
                GameState::Minigame
            }
            ActiveProgram::Store(_) => GameState::Store,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActiveProgram::Menu(_) => "menu",
            ActiveProgram::Slots(_) => "slots",
            ActiveProgram::Blackjack(_) => "blackjack",
            ActiveProgram::Roulette(_) => "roulette",
            ActiveProgram::Store(_) => "store",
        }
    }

    fn begin(&mut self, table: &mut Table<'_>) -> Result<bool, ProgramError> {
        match self {
            ActiveProgram::Menu(runner) => runner.begin(table),
            ActiveProgram::Slots(runner) => runner.begin(table),
            ActiveProgram::Blackjack(runner) => runner.begin(table),
            ActiveProgram::Roulette(runner) => runner.begin(table),
            ActiveProgram::Store(runner) => runner.begin(table),
        }
    }

    fn continue_with(&mut self, table: &mut Table<'_>, input: &str) -> Result<bool, ProgramError> {
        match self {
            ActiveProgram::Menu(runner) => runner.continue_with(table, input),
            ActiveProgram::Slots(runner) => runner.continue_with(table, input),
            ActiveProgram::Blackjack(runner) => runner.continue_with(table, input),
            ActiveProgram::Roulette(runner) => runner.continue_with(table, input),
            ActiveProgram::Store(runner) => runner.continue_with(table, input),
        }
    }
}

/// One gambling session.
pub struct Casino<R> {
    player: PlayerData,
    rng: R,
    out: Transcript,
    active: ActiveProgram,
    show_logo: bool,
}

impl<R: RandomSource> Casino<R> {
    /// Creates a session sitting on an unstarted main menu.
    pub fn new(player: PlayerData, rng: R) -> Self {
        Self {
            player,
            rng,
            out: Transcript::default(),
            active: ActiveProgram::Menu(Runner::new(MainMenu::new(true))),
            show_logo: true,
        }
    }

    /// Shows or hides the banner on every menu, including the first.
    pub fn with_logo(mut self, show_logo: bool) -> Self {
        self.show_logo = show_logo;
        self.active = ActiveProgram::Menu(Runner::new(MainMenu::new(show_logo)));
        self
    }

    pub fn player(&self) -> &PlayerData {
        &self.player
    }

    pub fn state(&self) -> GameState {
        self.active.state()
    }

    pub fn active(&self) -> &ActiveProgram {
        &self.active
    }

    pub fn transcript(&self) -> &Transcript {
        &self.out
    }

    /// Takes everything written since the last drain.
    pub fn drain_output(&mut self) -> Vec<Entry> {
        self.out.drain()
    }

    /// Begins the initial menu.
    pub fn start(&mut self) -> Result<Flow, ProgramError> {
        info!(coins = self.player.coins(), "session started");
        let mut table = Table {
            player: &mut self.player,
            rng: &mut self.rng,
            out: &mut self.out,
        };
        let complete = self.active.begin(&mut table)?;
        self.advance(complete)
    }

    /// Routes one line of input (already stripped of its line terminator) to the active
    /// program.
    pub fn process_input(&mut self, input: &str) -> Result<Flow, ProgramError> {
        let input = input.trim();
        let mut table = Table {
            player: &mut self.player,
            rng: &mut self.rng,
            out: &mut self.out,
        };
        let complete = self.active.continue_with(&mut table, input)?;
        self.advance(complete)
    }

    /// Swaps programs until the active one needs input, or the player quits.
    fn advance(&mut self, mut complete: bool) -> Result<Flow, ProgramError> {
        while complete {
            let next = match &self.active {
                ActiveProgram::Menu(menu) => match menu.program().selection() {
                    Some(MenuSelection::Quit) => {
                        info!(coins = self.player.coins(), "session ended");
                        return Ok(Flow::Quit);
                    }
                    Some(MenuSelection::Slots) => ActiveProgram::Slots(Runner::new(Slots::new())),
                    Some(MenuSelection::Blackjack) => {
                        ActiveProgram::Blackjack(Runner::new(Blackjack::new()))
                    }
                    Some(MenuSelection::Roulette) => {
                        ActiveProgram::Roulette(Runner::new(Roulette::new()))
                    }
                    Some(MenuSelection::Store) => ActiveProgram::Store(Runner::new(
                        Store::for_inventory(&self.player.inventory),
                    )),
                    None => self.menu(),
                },
                _ => self.menu(),
            };
            debug!(from = self.active.name(), to = next.name(), "switching program");
            self.active = next;

            let mut table = Table {
                player: &mut self.player,
                rng: &mut self.rng,
                out: &mut self.out,
            };
            complete = self.active.begin(&mut table)?;
        }
        Ok(Flow::Continue)
    }

    fn menu(&self) -> ActiveProgram {
        ActiveProgram::Menu(Runner::new(MainMenu::new(self.show_logo)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::ScriptedDraws;
    use gamblesim_types::ItemKind;

    fn session(draws: &[usize]) -> Casino<ScriptedDraws> {
        let mut casino = Casino::new(PlayerData::new(), ScriptedDraws::new(draws.iter().copied()))
            .with_logo(false);
        assert_eq!(casino.start(), Ok(Flow::Continue));
        casino
    }

    #[test]
    fn test_starts_on_menu() {
        let casino = session(&[]);
        assert_eq!(casino.state(), GameState::Menu);
        assert!(casino.transcript().contains("Coin total: 1,000"));
        assert!(!casino.transcript().contains("S I M U L A T O R"));
    }

    #[test]
    fn test_menu_routes_to_each_screen() {
        for (option, expected, name) in [
            ("slots", GameState::Minigame, "slots"),
            ("blackjack", GameState::Minigame, "blackjack"),
            ("roulette", GameState::Minigame, "roulette"),
            ("store", GameState::Store, "store"),
        ] {
            let mut casino = session(&[]);
            assert_eq!(casino.process_input(option), Ok(Flow::Continue));
            assert_eq!(casino.state(), expected);
            assert_eq!(casino.active().name(), name);
        }
    }

    #[test]
    fn test_invalid_menu_input_stays() {
        let mut casino = session(&[]);
        assert_eq!(casino.process_input("foobar"), Ok(Flow::Continue));
        assert_eq!(casino.state(), GameState::Menu);
    }

    #[test]
    fn test_quit_ends_session() {
        let mut casino = session(&[]);
        assert_eq!(casino.process_input("  Quit \n"), Ok(Flow::Quit));
    }

    #[test]
    fn test_completed_program_returns_to_menu() {
        let mut casino = session(&[]);
        casino.process_input("store").unwrap();
        casino.process_input("groceries").unwrap();
        casino.drain_output();
        assert_eq!(casino.process_input("exit"), Ok(Flow::Continue));
        assert_eq!(casino.state(), GameState::Menu);
        assert_eq!(casino.player().coins(), 970);
        assert!(casino.player().inventory.contains(ItemKind::Groceries));
        // The fresh menu shows what was bought.
        assert!(casino.transcript().contains("Your stuff:"));
    }

    #[test]
    fn test_blackjack_round_returns_to_menu() {
        // Dealer 10+9, player ace+king: natural settles on the wager line.
        let mut casino = session(&[9, 8, 0, 12]);
        casino.process_input("blackjack").unwrap();
        assert_eq!(casino.process_input("100"), Ok(Flow::Continue));
        assert_eq!(casino.state(), GameState::Menu);
        assert_eq!(casino.player().coins(), 1_200);
    }
}
