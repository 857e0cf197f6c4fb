//! Shared state for the gambling simulator.
//!
//! Everything here is long-lived for the whole session: the [Ledger] that owns the coin
//! balance, the append-only [Inventory], and the catalog of purchasable [ItemKind]s.

pub mod casino;

pub use casino::*;
