//! Money type for transaction amounts and totals
//!
//! Amounts are whole cents in an `i64`, so totals are exact. Transaction
//! amounts are never negative; signed values only appear in derived figures
//! such as a period's net.
//!
//! Single amounts are capped at [`Money::MAX`]; arithmetic saturates instead
//! of overflowing, so totals over any realistic ledger stay exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// A monetary amount in cents
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single transaction may carry (100 billion units)
    pub const MAX: Money = Money(10_000_000_000_000);

    /// Create an amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Money;
    /// assert_eq!(Money::from_cents(1050).to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from a whole number of currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse an amount such as `"10.50"`, `"$10.5"`, `"-3"` or `"1,250.00"`
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.');
        let digits: String = rest.chars().filter(|c| *c != ',').collect();

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits.as_str(), ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
            || fraction.len() > 2
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(invalid)?;
        if total > Self::MAX.0 {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }
        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol, e.g. `-$12.00`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol(""))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Errors from [`Money::parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    /// Magnitude above [`Money::MAX`]
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Amount is empty"),
            Self::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            Self::OutOfRange(s) => write!(f, "Amount out of range: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("$10.5").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("10").unwrap(), Money::from_cents(1000));
        assert_eq!(Money::parse(".99").unwrap(), Money::from_cents(99));
        assert_eq!(Money::parse("1,250.00").unwrap(), Money::from_cents(125_000));
        assert_eq!(Money::parse("-3").unwrap(), Money::from_cents(-300));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Money::parse("  "), Err(MoneyParseError::Empty));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_parse_enforces_maximum() {
        assert_eq!(Money::parse("100000000000").unwrap(), Money::MAX);
        assert!(matches!(
            Money::parse("100000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("-92233720368547758.07"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX - 1);
        let total: Money = [huge, huge, Money::from_cents(5)].iter().sum();
        assert_eq!(total, Money::from_cents(i64::MAX));
        assert_eq!(Money::from_cents(i64::MIN) - Money::from_cents(1), Money::from_cents(i64::MIN));
        assert_eq!(-Money::from_cents(i64::MIN), Money::from_cents(i64::MAX));

        let mut running = huge;
        running += huge;
        assert_eq!(running, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_cents(-1200).format_with_symbol("$"), "-$12.00");
        assert_eq!(format!("{:>8}", Money::from_cents(100)), "    1.00");
    }

    #[test]
    fn test_sum_is_exact() {
        let amounts = vec![Money::from_cents(10), Money::from_cents(20), Money::from_cents(70)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_units(1));
    }
}
