//! Integer rupee amounts.
//!
//! All monetary values in the storefront are whole rupees. Catalog prices,
//! cart subtotals, shipping fees, and COD amounts all use [`Amount`]; the
//! payment gateway is the only interface that wants paise, and
//! [`Amount::to_minor_units`] exists solely for that boundary.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// A monetary amount in whole rupees.
///
/// Displays with the `₹` sign and Indian digit grouping (`₹1,999`,
/// `₹1,00,000`), matching how prices are shown everywhere in the shop.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole rupees.
    #[must_use]
    pub const fn new(rupees: i64) -> Self {
        Self(rupees)
    }

    /// The amount in whole rupees.
    #[must_use]
    pub const fn rupees(self) -> i64 {
        self.0
    }

    /// The amount in paise (1/100 rupee).
    ///
    /// This conversion belongs at the payment-gateway boundary only; stored
    /// and displayed amounts stay in whole rupees.
    #[must_use]
    pub const fn to_minor_units(self) -> i64 {
        self.0 * 100
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Amount {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * i64::from(rhs))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", group_indian(self.0))
    }
}

/// Format an integer with Indian digit grouping: the last three digits form
/// one group, every pair above them another (12,34,567).
fn group_indian(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);

    if let Some(split) = digits.len().checked_sub(3)
        && split > 0
    {
        let (head, tail) = digits.split_at(split);
        let mut pairs = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (front, pair) = rest.split_at(rest.len() - 2);
            pairs.push(pair);
            rest = front;
        }
        pairs.push(rest);
        for pair in pairs.iter().rev() {
            grouped.push_str(pair);
            grouped.push(',');
        }
        grouped.push_str(tail);
    } else {
        grouped.push_str(&digits);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Amount::new(0).to_string(), "₹0");
        assert_eq!(Amount::new(100).to_string(), "₹100");
        assert_eq!(Amount::new(999).to_string(), "₹999");
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Amount::new(1999).to_string(), "₹1,999");
        assert_eq!(Amount::new(12345).to_string(), "₹12,345");
        assert_eq!(Amount::new(100_000).to_string(), "₹1,00,000");
        assert_eq!(Amount::new(1_234_567).to_string(), "₹12,34,567");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Amount::new(-2099).to_string(), "₹-2,099");
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Amount::new(1999).to_minor_units(), 199_900);
        assert_eq!(Amount::ZERO.to_minor_units(), 0);
    }

    #[test]
    fn test_arithmetic() {
        let price = Amount::new(1999);
        assert_eq!(price * 3, Amount::new(5997));
        assert_eq!(price + Amount::new(100), Amount::new(2099));

        let subtotal: Amount = [Amount::new(1999), Amount::new(2499)].into_iter().sum();
        assert_eq!(subtotal, Amount::new(4498));
    }

    #[test]
    fn test_serde_transparent() {
        let amount = Amount::new(2499);
        assert_eq!(serde_json::to_string(&amount).unwrap(), "2499");
        let parsed: Amount = serde_json::from_str("2499").unwrap();
        assert_eq!(parsed, amount);
    }
}
