//! Concrete programs: the main menu, the store and the three minigames.

pub mod blackjack;
pub(crate) mod cards;
pub mod logging;
pub mod menu;
pub mod payout;
pub mod roulette;
pub mod slots;
pub mod store;
mod wager;

pub use cards::Rank;
