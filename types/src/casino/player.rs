use super::{ItemKind, Ledger, STARTING_COINS};

/// Items the player has bought this session. Append-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<ItemKind>,
}

impl Inventory {
    /// Adds `item`, returning false if it was already owned.
    pub fn add(&mut self, item: ItemKind) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: ItemKind) -> bool {
        self.items.contains(&item)
    }

    /// Owned items in purchase order.
    pub fn items(&self) -> &[ItemKind] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// All long-term player data: the coin ledger and the purchased items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerData {
    pub ledger: Ledger,
    pub inventory: Inventory,
}

impl PlayerData {
    /// Player data in its original state: [STARTING_COINS] and no items.
    pub fn new() -> Self {
        Self::with_coins(STARTING_COINS)
    }

    pub fn with_coins(coins: u64) -> Self {
        Self {
            ledger: Ledger::new(coins),
            inventory: Inventory::default(),
        }
    }

    pub fn coins(&self) -> u64 {
        self.ledger.balance()
    }
}

impl Default for PlayerData {
    fn default() -> Self {
        Self::new()
    }
}
