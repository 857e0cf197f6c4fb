use super::cards::Rank;
use std::fmt::Write;

/// Formats a coin amount with thousands separators (`1234567` -> `1,234,567`).
pub fn format_coins(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_hand(cards: &[Rank]) -> String {
    let mut out = String::with_capacity(cards.len().saturating_mul(6));
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", card);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coins() {
        assert_eq!(format_coins(0), "0");
        assert_eq!(format_coins(999), "999");
        assert_eq!(format_coins(1_000), "1,000");
        assert_eq!(format_coins(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_hand() {
        assert_eq!(format_hand(&[]), "");
        assert_eq!(format_hand(&[Rank::Ace, Rank::Ten]), "ace, 10");
    }
}
