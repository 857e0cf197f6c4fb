/// Starting coins for a new session
pub const STARTING_COINS: u64 = 1_000;

/// Version string shown under the menu banner
pub const GAME_VERSION: &str = "Gambling Simulator v1.0";

/// Credit line shown under the menu banner
pub const CREDITS: &str = "By Daniel Myers, Aiden Kline, Parker Cornelius, and Caleb Arnold";

/// Number of faces on each slot reel.
pub const SLOT_REEL_FACES: usize = 21;

/// Number of pockets on the (American) roulette wheel: 1..=36, 0 and 00.
pub const ROULETTE_POCKETS: usize = 38;

/// Dealer keeps drawing while their total is below this value.
pub const DEALER_STAND_THRESHOLD: u8 = 17;

/// Best possible blackjack total.
pub const BLACKJACK_TARGET: u8 = 21;
