//! Loan and asset data models
//!
//! Inputs for the amortization and depreciation schedule builders, and the
//! per-period entries they produce.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Money;

/// A fixed-payment loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Amount borrowed
    pub principal: Money,
    /// Annual interest rate as a percentage (e.g. 11.75 for prime)
    pub annual_rate_pct: f64,
    /// Term in months; must be at least 1
    pub term_months: u32,
    /// Date of the first payment
    pub start_date: NaiveDate,
}

/// One row of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based payment number
    pub payment_number: u32,
    /// Payment date: start date advanced by (payment_number - 1) months
    pub payment_date: NaiveDate,
    /// Portion of the payment reducing the balance
    pub principal_payment: Money,
    /// Portion of the payment covering interest
    pub interest_payment: Money,
    /// Principal plus interest for the period
    pub total_payment: Money,
    /// Balance outstanding after this payment (floored at zero)
    pub remaining_balance: Money,
}

/// Depreciation method for a fixed asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepreciationMethod {
    /// Equal write-off of (cost - residual) over the useful life
    StraightLine,
    /// Fixed annual percentage of the opening book value
    DecliningBalance {
        /// Annual rate as a percentage (e.g. 20.0)
        rate_pct: f64,
    },
}

impl fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StraightLine => f.write_str("straight-line"),
            Self::DecliningBalance { rate_pct } => {
                write!(f, "declining-balance {}%", rate_pct)
            }
        }
    }
}

/// A depreciable fixed asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Asset description
    pub description: String,
    /// Acquisition cost
    pub cost: Money,
    /// Expected residual value at the end of the useful life
    #[serde(default)]
    pub residual_value: Money,
    /// Useful life in months; must be at least 1
    pub useful_life_months: u32,
    /// Depreciation method
    pub method: DepreciationMethod,
    /// Date the asset was brought into use
    pub start_date: NaiveDate,
}

/// One row of a depreciation schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationEntry {
    /// 1-based period number (months)
    pub period: u32,
    /// Period date: start date advanced by (period - 1) months
    pub period_date: NaiveDate,
    /// Depreciation charged this period
    pub depreciation: Money,
    /// Accumulated depreciation to date
    pub accumulated: Money,
    /// Book value after this period's charge
    pub closing_book_value: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_display() {
        assert_eq!(DepreciationMethod::StraightLine.to_string(), "straight-line");
        assert_eq!(
            DepreciationMethod::DecliningBalance { rate_pct: 20.0 }.to_string(),
            "declining-balance 20%"
        );
    }

    #[test]
    fn test_loan_serde_round_trip() {
        let loan = Loan {
            principal: Money::from_rands(250_000),
            annual_rate_pct: 11.75,
            term_months: 60,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let json = serde_json::to_string(&loan).unwrap();
        let back: Loan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.principal, loan.principal);
        assert_eq!(back.term_months, 60);
    }
}
