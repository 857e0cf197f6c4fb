//! Blackjack against a single dealer.
//!
//! One round per visit:
//! 1. The player places a wager.
//! 2. Dealer and player each receive two cards from an infinite shoe (dealer first).
//! 3. Naturals settle immediately: both -> push (1x), player only -> 3x, dealer only -> 0.
//! 4. Otherwise the player hits until they stand, bust (0) or reach 21 (automatic stand).
//! 5. The dealer draws below 17, then totals are compared: dealer bust or a higher player
//!    total pays 2x, a tie pushes (1x), a lower total pays nothing.
//!
//! Exactly one payout is granted per round, after which the program completes.

use super::{
    cards::{hand_value, is_natural, Rank},
    logging::{format_coins, format_hand},
    payout::Multiplier,
    wager,
};
use crate::program::{Program, ProgramError, Table};
use gamblesim_types::{BLACKJACK_TARGET, DEALER_STAND_THRESHOLD};
use tracing::debug;

const GAME: &str = "blackjack";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    AwaitingWager,
    PlayerTurn,
    Settled,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerNatural,
    DealerNatural,
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

impl Outcome {
    pub fn multiplier(self) -> Multiplier {
        match self {
            Outcome::PlayerNatural => Multiplier::whole(3),
            Outcome::DealerBust | Outcome::PlayerWins => Multiplier::whole(2),
            Outcome::Push => Multiplier::ONE,
            Outcome::DealerNatural | Outcome::PlayerBust | Outcome::DealerWins => Multiplier::ZERO,
        }
    }

    fn message(self) -> &'static str {
        match self {
            Outcome::PlayerNatural => "Blackjack! You win big!",
            Outcome::DealerNatural => "The dealer has blackjack. You lose.",
            Outcome::PlayerBust => "Bust! You went over 21.",
            Outcome::DealerBust => "The dealer busts. You win!",
            Outcome::PlayerWins => "You beat the dealer!",
            Outcome::DealerWins => "The dealer wins.",
            Outcome::Push => "Push. Your bet is returned.",
        }
    }
}

/// Compares final totals once both sides are done drawing.
pub fn compare_totals(player: u8, dealer: u8) -> Outcome {
    if dealer > BLACKJACK_TARGET {
        Outcome::DealerBust
    } else if player > dealer {
        Outcome::PlayerWins
    } else if player == dealer {
        Outcome::Push
    } else {
        Outcome::DealerWins
    }
}

/// Blackjack program.
#[derive(Debug)]
pub struct Blackjack {
    stage: Stage,
    wager: u64,
    dealer: Vec<Rank>,
    player: Vec<Rank>,
    outcome: Option<Outcome>,
}

impl Default for Blackjack {
    fn default() -> Self {
        Self::new()
    }
}

impl Blackjack {
    pub fn new() -> Self {
        Self {
            stage: Stage::AwaitingWager,
            wager: 0,
            dealer: Vec::with_capacity(6),
            player: Vec::with_capacity(6),
            outcome: None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn player_hand(&self) -> &[Rank] {
        &self.player
    }

    pub fn dealer_hand(&self) -> &[Rank] {
        &self.dealer
    }

    fn show_player(&self, table: &mut Table<'_>) {
        table.out.say(format!(
            "Your hand: {} (total {})",
            format_hand(&self.player),
            hand_value(&self.player)
        ));
    }

    fn show_dealer(&self, table: &mut Table<'_>) {
        table.out.say(format!(
            "Dealer's hand: {} (total {})",
            format_hand(&self.dealer),
            hand_value(&self.dealer)
        ));
    }

    fn deal(&mut self, table: &mut Table<'_>) {
        for _ in 0..2 {
            self.dealer.push(Rank::deal(table.rng));
        }
        for _ in 0..2 {
            self.player.push(Rank::deal(table.rng));
        }
        debug!(dealer = %format_hand(&self.dealer), player = %format_hand(&self.player), "dealt");
    }

    fn check_naturals(&self) -> Option<Outcome> {
        match (is_natural(&self.player), is_natural(&self.dealer)) {
            (true, true) => Some(Outcome::Push),
            (true, false) => Some(Outcome::PlayerNatural),
            (false, true) => Some(Outcome::DealerNatural),
            (false, false) => None,
        }
    }

    fn dealer_turn(&mut self, table: &mut Table<'_>) -> Outcome {
        self.show_dealer(table);
        while hand_value(&self.dealer) < DEALER_STAND_THRESHOLD {
            let card = Rank::deal(table.rng);
            self.dealer.push(card);
            table.out.say(format!("The dealer draws a {card}."));
        }
        self.show_dealer(table);
        compare_totals(hand_value(&self.player), hand_value(&self.dealer))
    }

    fn settle(&mut self, table: &mut Table<'_>, outcome: Outcome) -> Result<bool, ProgramError> {
        table.out.say(outcome.message());
        self.outcome = Some(outcome);
        self.stage = Stage::Settled;
        wager::settle(table, GAME, self.wager, outcome.multiplier().apply(self.wager))?;
        Ok(true)
    }

    fn prompt_action(table: &mut Table<'_>) {
        table.out.prompt("Hit or stand? ");
    }
}

impl Program for Blackjack {
    fn execute(&mut self, table: &mut Table<'_>) -> Result<bool, ProgramError> {
        table.out.say("Welcome to Blackjack!");
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
                let Some(bet) = wager::take_wager(table, GAME, input) else {
                    table.out.prompt("How much would you like to bet? ");
                    return Ok(false);
                };
                self.wager = bet;
                self.deal(table);
                if let Some(outcome) = self.check_naturals() {
                    self.show_dealer(table);
                    self.show_player(table);
                    return self.settle(table, outcome);
                }
                table
                    .out
                    .say(format!("The dealer shows a {}.", self.dealer[0]));
                self.show_player(table);
                self.stage = Stage::PlayerTurn;
                Self::prompt_action(table);
                Ok(false)
            }
            Stage::PlayerTurn => match input.trim().to_ascii_lowercase().as_str() {
                "hit" => {
                    let card = Rank::deal(table.rng);
                    self.player.push(card);
                    table.out.say(format!("You draw a {card}."));
                    self.show_player(table);
                    let total = hand_value(&self.player);
                    if total > BLACKJACK_TARGET {
                        return self.settle(table, Outcome::PlayerBust);
                    }
                    if total == BLACKJACK_TARGET {
                        let outcome = self.dealer_turn(table);
                        return self.settle(table, outcome);
                    }
                    Self::prompt_action(table);
                    Ok(false)
                }
                "stand" => {
                    let outcome = self.dealer_turn(table);
                    self.settle(table, outcome)
                }
                _ => {
                    table.out.say("Please type 'hit' or 'stand'.");
                    Self::prompt_action(table);
                    Ok(false)
                }
            },
            // The runner never feeds a completed program.
            Stage::Settled => Err(ProgramError::AlreadyCompleted),
        }
    }
}
