//! Store.
//!
//! Lists every catalog item the player does not own yet. Typing an item's name buys it;
//! `exit` returns to the menu. Prices settle through the ledger: a positive price is debited
//! like a wager (and refused if the player cannot cover it), a negative price is credited.

use super::logging::format_coins;
use crate::program::{Program, ProgramError, Table};
use gamblesim_types::{Inventory, ItemKind};
use std::cmp::Ordering;
use tracing::info;

/// Store program.
#[derive(Debug)]
pub struct Store {
    stock: Vec<ItemKind>,
}

impl Store {
    /// Opens the store with everything not already in `inventory`.
    pub fn for_inventory(inventory: &Inventory) -> Self {
        Self {
            stock: ItemKind::ALL
                .into_iter()
                .filter(|item| !inventory.contains(*item))
                .collect(),
        }
    }

    pub fn stock(&self) -> &[ItemKind] {
        &self.stock
    }

    fn render(&self, table: &mut Table<'_>) {
        table.out.blank();
        if self.stock.is_empty() {
            table.out.say("Sold out! You own everything we have.");
        } else {
            table.out.say(format!("  {:<20} {:>7}", "Name", "Price"));
            table.out.say(format!("  {:-<20} {:->7}", "", ""));
            for item in &self.stock {
                table.out.say(format!("  {:<20} {:>7}", item.name(), item.price()));
            }
        }
        table.out.say(format!(
            "You have {} coins.",
            format_coins(table.player.coins())
        ));
        table
            .out
            .prompt("What would you like to purchase? (Type exit to leave the store) ");
    }

    fn purchase(&mut self, table: &mut Table<'_>, input: &str) -> Result<(), ProgramError> {
        let Some(position) = ItemKind::from_name(input)
            .and_then(|wanted| self.stock.iter().position(|item| *item == wanted))
        else {
            table.out.say("Um, I don't think we sell that here...");
            return Ok(());
        };
        let item = self.stock[position];
        let price = item.price();

        let paid = match price.cmp(&0) {
            Ordering::Greater => table.player.ledger.place_wager(price),
            Ordering::Equal => true,
            Ordering::Less => {
                table.player.ledger.grant_payout(price.saturating_neg())?;
                true
            }
        };
        if !paid {
            table.out.say("Sorry, you don't have enough money!");
            return Ok(());
        }

        self.stock.remove(position);
        table.player.inventory.add(item);
        info!(%item, price, balance = table.player.coins(), "item purchased");
        table.out.say(item.purchase_message());
        Ok(())
    }
}

impl Program for Store {
    fn execute(&mut self, table: &mut Table<'_>) -> Result<bool, ProgramError> {
        table.out.say("Welcome to the store!");
        self.render(table);
        Ok(false)
    }

    fn process_input(&mut self, table: &mut Table<'_>, input: &str) -> Result<bool, ProgramError> {
        if input.trim().eq_ignore_ascii_case("exit") {
            table.out.say("Come again!");
            return Ok(true);
        }
        self.purchase(table, input)?;
        self.render(table);
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mocks::ScriptedDraws, transcript::Transcript};
    use gamblesim_types::PlayerData;

    fn visit(player: &mut PlayerData, inputs: &[&str]) -> (Store, Vec<bool>, Transcript) {
        let mut rng = ScriptedDraws::default();
        let mut out = Transcript::default();
        let mut store = Store::for_inventory(&player.inventory);
        let mut table = Table {
            player,
            rng: &mut rng,
            out: &mut out,
        };
        assert!(!store.execute(&mut table).unwrap());
        let done = inputs
            .iter()
            .map(|input| store.process_input(&mut table, input).unwrap())
            .collect();
        (store, done, out)
    }

    #[test]
    fn test_buy_groceries() {
        let mut player = PlayerData::new();
        let (store, done, out) = visit(&mut player, &["groceries", "exit"]);
        assert_eq!(done, vec![false, true]);
        assert_eq!(player.coins(), 970);
        assert!(player.inventory.contains(ItemKind::Groceries));
        assert!(!store.stock().contains(&ItemKind::Groceries));
        assert!(out.contains(ItemKind::Groceries.purchase_message()));
    }

    #[test]
    fn test_listing_has_header_and_prompt() {
        let mut player = PlayerData::new();
        let (_, _, out) = visit(&mut player, &[]);
        let rendered = out.render();
        assert!(rendered.contains("  Name                   Price\n"));
        assert!(rendered.contains("  Groceries                 30\n"));
        assert!(rendered.contains("  Predatory Loan         -2500\n"));
        assert_eq!(
            out.last_prompt(),
            Some("What would you like to purchase? (Type exit to leave the store) ")
        );
    }

    #[test]
    fn test_cannot_afford() {
        let mut player = PlayerData::new();
        let (store, done, out) = visit(&mut player, &["2008 Honda Civic"]);
        assert_eq!(done, vec![false]);
        assert_eq!(player.coins(), 1_000);
        assert!(player.inventory.is_empty());
        assert_eq!(store.stock().len(), 4);
        assert!(out.contains("don't have enough"));
    }

    #[test]
    fn test_loan_credits_coins() {
        let mut player = PlayerData::with_coins(0);
        let (_, _, _) = visit(&mut player, &["predatory loan"]);
        assert_eq!(player.coins(), 2_500);
        assert!(player.inventory.contains(ItemKind::PredatoryLoan));
    }

    #[test]
    fn test_unknown_item_and_owned_items_hidden() {
        let mut player = PlayerData::new();
        player.inventory.add(ItemKind::Rent);
        let (store, done, out) = visit(&mut player, &["rent", "pony", "EXIT"]);
        assert_eq!(done, vec![false, false, true]);
        assert_eq!(player.coins(), 1_000);
        assert!(!store.stock().contains(&ItemKind::Rent));
        assert!(out.contains("don't think we sell that"));
    }

    #[test]
    fn test_sold_out() {
        let mut player = PlayerData::new();
        for item in ItemKind::ALL {
            player.inventory.add(item);
        }
        let (store, _, out) = visit(&mut player, &[]);
        assert!(store.stock().is_empty());
        assert!(out.contains("Sold out"));
    }
}
