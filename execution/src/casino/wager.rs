//! Wager intake and settlement shared by the minigames.

use super::logging::format_coins;
use crate::program::Table;
use gamblesim_types::LedgerError;
use tracing::{debug, info};

/// Parses `input` as a wager and debits it. Writes a rejection message on failure.
pub(crate) fn take_wager(table: &mut Table<'_>, game: &'static str, input: &str) -> Option<u64> {
    let amount = match input.trim().parse::<i64>() {
        Ok(amount) => amount,
        Err(_) => {
            table.out.say("That isn't a whole number of coins.");
            return None;
        }
    };
    if !table.player.ledger.place_wager(amount) {
        table.out.say(format!(
            "You can bet between 1 and {} coins.",
            format_coins(table.player.coins())
        ));
        return None;
    }
    debug!(game, amount, balance = table.player.coins(), "wager placed");
    table.out.say(format!("Bet {} coins!", format_coins(amount.unsigned_abs())));
    Some(amount.unsigned_abs())
}

/// Credits a round's payout and reports the new balance.
pub(crate) fn settle(
    table: &mut Table<'_>,
    game: &'static str,
    wager: u64,
    payout: i64,
) -> Result<(), LedgerError> {
    table.player.ledger.grant_payout(payout)?;
    info!(game, wager, payout, balance = table.player.coins(), "round settled");
    if payout > 0 {
        table
            .out
            .say(format!("You won {} coins!", format_coins(payout.unsigned_abs())));
    }
    table.out.say(format!(
        "You now have {} coins.",
        format_coins(table.player.coins())
    ));
    Ok(())
}
