//! Gambling simulator execution layer.
//!
//! This crate contains the turn-resumption protocol every interactive screen follows
//! ([Program] driven through a [Runner]), the [Casino] dispatcher that routes each line of
//! input to the active program, and the concrete programs themselves (menu, store, slots,
//! blackjack, roulette).
//!
//! ## Turn protocol
//! - [Runner::begin] is called exactly once and performs everything that needs no input.
//! - [Runner::continue_with] is then called once per input line until it returns `true`.
//! - A completed runner is terminal. Misuse is reported as a [ProgramError] and is always a
//!   dispatcher bug, never a user-facing condition.
//!
//! ## Minimal session (example)
//! ```rust,ignore
//! use gamblesim_execution::{Casino, CasinoRng, Flow};
//! use gamblesim_types::PlayerData;
//!
//! let mut casino = Casino::new(PlayerData::new(), CasinoRng::seeded(7));
//! casino.start()?;
//! for line in ["slots", "100", "stop", "quit"] {
//!     if casino.process_input(line)? == Flow::Quit {
//!         break;
//!     }
//! }
//! ```

pub mod casino;
pub mod dispatcher;
pub mod program;
pub mod rng;
pub mod transcript;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use casino::{
    blackjack::Blackjack, menu::MainMenu, menu::MenuSelection, roulette::Roulette, slots::Slots,
    store::Store,
};
pub use dispatcher::{ActiveProgram, Casino, Flow, GameState};
pub use program::{Lifecycle, Program, ProgramError, Runner, Table};
pub use rng::{CasinoRng, RandomSource};
pub use transcript::{Entry, Transcript};
