//! Main menu.
//!
//! Renders the banner, the coin total and the player's belongings, then waits for one of the
//! menu options. The chosen option is read back by the dispatcher once the menu completes.

use super::logging::format_coins;
use crate::program::{Program, ProgramError, Table};
use gamblesim_types::{CREDITS, GAME_VERSION};
use std::fmt;
use tracing::debug;

const LOGO: [&str; 7] = [
    r"   ____                 _     _ _             ",
    r"  / ___| __ _ _ __ ___ | |__ | (_)_ __   __ _ ",
    r" | |  _ / _` | '_ ` _ \| '_ \| | | '_ \ / _` |",
    r" | |_| | (_| | | | | | | |_) | | | | | | (_| |",
    r"  \____|\__,_|_| |_| |_|_.__/|_|_|_| |_|\__, |",
    r"                 S I M U L A T O R      |___/ ",
    r"",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSelection {
    Blackjack,
    Slots,
    Roulette,
    Store,
    Quit,
}

impl MenuSelection {
    pub const ALL: [MenuSelection; 5] = [
        MenuSelection::Blackjack,
        MenuSelection::Slots,
        MenuSelection::Roulette,
        MenuSelection::Store,
        MenuSelection::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuSelection::Blackjack => "BLACKJACK",
            MenuSelection::Slots => "SLOTS",
            MenuSelection::Roulette => "ROULETTE",
            MenuSelection::Store => "STORE",
            MenuSelection::Quit => "QUIT",
        }
    }

    /// Case-insensitive match against the option labels.
    pub fn parse(input: &str) -> Option<MenuSelection> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for MenuSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Main menu program.
#[derive(Debug)]
pub struct MainMenu {
    show_logo: bool,
    selection: Option<MenuSelection>,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MainMenu {
    pub fn new(show_logo: bool) -> Self {
        Self {
            show_logo,
            selection: None,
        }
    }

    /// The option chosen, once the menu has completed.
    pub fn selection(&self) -> Option<MenuSelection> {
        self.selection
    }

    fn render(&self, table: &mut Table<'_>) {
        if self.show_logo {
            for line in LOGO {
                table.out.say(line);
            }
        }
        table.out.say(CREDITS);
        table.out.say(GAME_VERSION);
        table.out.blank();

        let options: Vec<&str> = MenuSelection::ALL.iter().map(|o| o.label()).collect();
        table.out.say(options.join("   "));
        table.out.blank();

        let coins = table.player.coins();
        if coins == 0 {
            table
                .out
                .say(format!("Coin total: {} (you're broke!)", format_coins(coins)));
        } else {
            table.out.say(format!("Coin total: {}", format_coins(coins)));
        }

        let items = table.player.inventory.items().to_vec();
        if !items.is_empty() {
            table.out.blank();
            table.out.say("Your stuff:");
            for item in items {
                table.out.say(format!("  {item}"));
                for line in item.picture() {
                    table.out.say(format!("    {line}"));
                }
            }
        }
        table.out.blank();
    }
}

impl Program for MainMenu {
    fn execute(&mut self, table: &mut Table<'_>) -> Result<bool, ProgramError> {
        self.render(table);
        table.out.prompt("What would you like to do? ");
        Ok(false)
    }

    fn process_input(&mut self, table: &mut Table<'_>, input: &str) -> Result<bool, ProgramError> {
        match MenuSelection::parse(input) {
            Some(selection) => {
                debug!(%selection, "menu option chosen");
                self.selection = Some(selection);
                Ok(true)
            }
            None => {
                table
                    .out
                    .prompt("Enter one of the options above (i.e. blackjack, store, quit): ");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mocks::ScriptedDraws, transcript::Transcript};
    use gamblesim_types::{ItemKind, PlayerData};

    #[test]
    fn test_parse_selection() {
        assert_eq!(MenuSelection::parse("slots"), Some(MenuSelection::Slots));
        assert_eq!(MenuSelection::parse(" BlackJack "), Some(MenuSelection::Blackjack));
        assert_eq!(MenuSelection::parse("QUIT"), Some(MenuSelection::Quit));
        assert_eq!(MenuSelection::parse("foobar"), None);
        assert_eq!(MenuSelection::parse(""), None);
    }

    #[test]
    fn test_menu_waits_for_valid_option() {
        let mut player = PlayerData::new();
        let mut rng = ScriptedDraws::default();
        let mut out = Transcript::default();
        let mut menu = MainMenu::new(true);
        let mut table = Table {
            player: &mut player,
            rng: &mut rng,
            out: &mut out,
        };

        assert!(!menu.execute(&mut table).unwrap());
        assert!(!menu.process_input(&mut table, "foobar").unwrap());
        assert_eq!(menu.selection(), None);
        assert!(menu.process_input(&mut table, "roulette").unwrap());
        assert_eq!(menu.selection(), Some(MenuSelection::Roulette));

        assert!(out.contains("BLACKJACK   SLOTS   ROULETTE   STORE   QUIT"));
        assert!(out.contains("Coin total: 1,000"));
        assert!(out.contains("S I M U L A T O R"));
        assert!(out.contains("i.e. blackjack"));
    }

    #[test]
    fn test_menu_shows_broke_marker_and_items() {
        let mut player = PlayerData::with_coins(0);
        player.inventory.add(ItemKind::Groceries);
        let mut rng = ScriptedDraws::default();
        let mut out = Transcript::default();
        let mut menu = MainMenu::new(false);
        let mut table = Table {
            player: &mut player,
            rng: &mut rng,
            out: &mut out,
        };

        menu.execute(&mut table).unwrap();
        assert!(out.contains("you're broke"));
        assert!(out.contains("Groceries"));
        assert!(!out.contains("S I M U L A T O R"));
    }
}
