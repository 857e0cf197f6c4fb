//! Casino domain types.
//!
//! Defines the player/ledger/inventory state and constants used by the execution layer
//! and the terminal front-end.

mod constants;
mod item;
mod ledger;
mod player;

pub use constants::*;
pub use item::*;
pub use ledger::*;
pub use player::*;
