//! Money type for representing rand amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, rate multiplication for tax
//! calculations, and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a ZAR amount stored as cents (hundredths of a rand)
///
/// Using i64 cents avoids floating-point precision issues and supports
/// amounts far beyond anything a payroll or ledger will see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use rigel_tax::models::Money;
    /// let amount = Money::from_cents(1050); // R10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole rands
    pub const fn from_rands(rands: i64) -> Self {
        Self(rands * 100)
    }

    /// Create a Money amount from a floating-point rand value,
    /// rounded half-away-from-zero to the cent
    pub fn from_rands_f64(rands: f64) -> Self {
        Self((rands * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as floating-point rands (for formula inputs only;
    /// results should be rounded back to cents immediately)
    pub fn to_rands_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole rands portion (truncated toward zero)
    pub const fn rands(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiply by a fractional rate (tax rate, probability, monthly interest),
    /// rounding half-away-from-zero to the cent
    ///
    /// This is the single rounding point for every "rounded to 2 decimals"
    /// rule in the tax engines.
    pub fn mul_rate(&self, rate: f64) -> Self {
        Self((self.0 as f64 * rate).round() as i64)
    }

    /// Multiply by an integer factor (e.g. annualising a monthly salary)
    pub const fn mul(&self, factor: i64) -> Self {
        Self(self.0 * factor)
    }

    /// Divide by an integer divisor, rounding half-away-from-zero to the cent
    /// (e.g. de-annualising annual tax back to a monthly amount)
    pub fn div_round(&self, divisor: i64) -> Self {
        Self((self.0 as f64 / divisor as f64).round() as i64)
    }

    /// Return the smaller of two amounts (used for caps like UIF)
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Return the larger of two amounts (used for floors like PAYE at zero)
    pub fn max(self, other: Self) -> Self {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "R10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('R').unwrap_or(s);

        // Parse based on format
        let cents = if s.contains('.') {
            // Decimal format: "10.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let rands: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate cents to 2 digits
            let cents_str = parts[1];
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => cents_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            rands * 100 + cents
        } else {
            // Integer format - assume rands
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.rands().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.rands(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-R{}.{:02}", self.rands().abs(), self.cents_part())
        } else {
            write!(f, "R{}.{:02}", self.rands(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.rands(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_rands() {
        assert_eq!(Money::from_rands(10).cents(), 1000);
        assert_eq!(Money::from_rands_f64(10.505).cents(), 1051);
        assert_eq!(Money::from_rands_f64(-10.505).cents(), -1051);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "R10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "R0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-R10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "R0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_mul_rate_rounds_to_cent() {
        // 100000.00 * 0.27 = 27000.00 exactly
        assert_eq!(Money::from_rands(100_000).mul_rate(0.27).cents(), 2_700_000);
        // 10.00 * 0.333 = 3.33
        assert_eq!(Money::from_cents(1000).mul_rate(0.333).cents(), 333);
        // half rounds away from zero
        assert_eq!(Money::from_cents(1000).mul_rate(0.3335).cents(), 334);
    }

    #[test]
    fn test_div_round() {
        // 25443.00 / 12 = 2120.25 exactly
        assert_eq!(Money::from_rands(25_443).div_round(12).cents(), 212_025);
        assert_eq!(Money::from_cents(100).div_round(3).cents(), 33);
    }

    #[test]
    fn test_min_max() {
        let cap = Money::from_cents(17712);
        assert_eq!(Money::from_cents(50000).min(cap), cap);
        assert_eq!(Money::from_cents(-100).max(Money::zero()), Money::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("R10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
