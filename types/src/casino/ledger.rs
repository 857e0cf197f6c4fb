use thiserror::Error as ThisError;

#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("attempted to pay out a negative amount of coins (amount={amount})")]
    NegativePayout { amount: i64 },
    #[error("payout would overflow the balance (balance={balance}, amount={amount})")]
    BalanceOverflow { balance: u64, amount: i64 },
}

/// Owner of the player's coin balance.
///
/// All balance mutation goes through [Ledger::place_wager] and [Ledger::grant_payout], so the
/// balance can never be observed below zero no matter which program is settling against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    balance: u64,
}

impl Ledger {
    pub fn new(balance: u64) -> Self {
        Self { balance }
    }

    /// Returns the number of coins the player currently has.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns true if `amount` is positive and covered by the balance.
    pub fn is_valid_wager(&self, amount: i64) -> bool {
        match u64::try_from(amount) {
            Ok(amount) => amount > 0 && amount <= self.balance,
            Err(_) => false,
        }
    }

    /// Removes `amount` from the balance.
    ///
    /// Returns false (and leaves the balance untouched) when the wager is not valid.
    pub fn place_wager(&mut self, amount: i64) -> bool {
        if !self.is_valid_wager(amount) {
            return false;
        }
        // Validity guarantees 0 < amount <= balance.
        self.balance -= amount.unsigned_abs();
        true
    }

    /// Adds `amount` to the balance. A payout of zero is a no-op.
    pub fn grant_payout(&mut self, amount: i64) -> Result<(), LedgerError> {
        let credit = u64::try_from(amount).map_err(|_| LedgerError::NegativePayout { amount })?;
        self.balance = self
            .balance
            .checked_add(credit)
            .ok_or(LedgerError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(super::STARTING_COINS)
    }
}
