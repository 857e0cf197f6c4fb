//! Exact payout arithmetic.
//!
//! Multipliers are kept as integer ratios so fractional payouts (e.g. 7/4 of the wager) never
//! touch floating point. Results are rounded half-to-even and clamped into `i64`.

/// Clamps an unsigned wide value into `i64`.
pub fn clamp_i64(value: u128) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// `numerator / denominator`, rounded to the nearest integer with ties going to the even
/// neighbour. `denominator` must be non-zero.
pub fn round_half_even(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator / denominator;
    let twice_remainder = (numerator % denominator) * 2;
    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// A payout multiplier applied to the original wager (the stake is included).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Multiplier {
    numerator: u64,
    denominator: u64,
}

impl Multiplier {
    pub const ZERO: Multiplier = Multiplier::whole(0);
    pub const ONE: Multiplier = Multiplier::whole(1);

    /// `numerator / denominator`. A zero denominator is treated as one.
    pub const fn ratio(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator: if denominator == 0 { 1 } else { denominator },
        }
    }

    pub const fn whole(value: u64) -> Self {
        Self::ratio(value, 1)
    }

    /// Payout for `wager`.
    pub fn apply(self, wager: u64) -> i64 {
        let scaled = u128::from(wager) * u128::from(self.numerator);
        clamp_i64(round_half_even(scaled, u128::from(self.denominator)))
    }
}
