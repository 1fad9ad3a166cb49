//! Ledger data models
//!
//! Postings, account classification, and the trial-balance rows/totals
//! produced by the aggregator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Money;

/// Ledger account classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl AccountKind {
    /// Parse from the free-text type column of an imported CSV
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asset" | "assets" => Some(Self::Asset),
            "liability" | "liabilities" => Some(Self::Liability),
            "equity" => Some(Self::Equity),
            "revenue" | "income" => Some(Self::Revenue),
            "expense" | "expenses" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Conventional statement ordering: balance sheet first, then income
    /// statement
    pub fn sort_order(&self) -> u8 {
        match self {
            Self::Asset => 0,
            Self::Liability => 1,
            Self::Equity => 2,
            Self::Revenue => 3,
            Self::Expense => 4,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Asset => "Asset",
            Self::Liability => "Liability",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
        };
        f.write_str(s)
    }
}

/// A single ledger posting against an account
///
/// Debit and credit are carried independently; the aggregator never nets
/// them against each other within a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    /// Account code (grouping key)
    pub account_code: String,
    /// Account name
    pub account_name: String,
    /// Account classification
    pub account_kind: AccountKind,
    /// Debit amount (zero if this is a credit posting)
    #[serde(default)]
    pub debit: Money,
    /// Credit amount (zero if this is a debit posting)
    #[serde(default)]
    pub credit: Money,
    /// Posting date; optional, period filtering is the caller's concern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// One trial-balance row: an account with its accumulated debit and credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account code
    pub code: String,
    /// Account name
    pub name: String,
    /// Account classification
    pub kind: AccountKind,
    /// Sum of debit postings
    pub debit: Money,
    /// Sum of credit postings
    pub credit: Money,
}

/// Grand totals across all trial-balance rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Sum of all rows' debit columns
    pub debit: Money,
    /// Sum of all rows' credit columns
    pub credit: Money,
}

impl TrialBalanceTotals {
    /// Signed difference between total debits and total credits
    pub fn difference(&self) -> Money {
        self.debit - self.credit
    }

    /// Whether the book balances
    ///
    /// Amounts are integer cents, so the conventional 0.01 float tolerance
    /// collapses to an exact zero-difference check.
    pub fn is_balanced(&self) -> bool {
        self.difference().is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_kind_parse() {
        assert_eq!(AccountKind::parse("Asset"), Some(AccountKind::Asset));
        assert_eq!(AccountKind::parse("  income "), Some(AccountKind::Revenue));
        assert_eq!(AccountKind::parse("EXPENSES"), Some(AccountKind::Expense));
        assert_eq!(AccountKind::parse("widget"), None);
    }

    #[test]
    fn test_totals_balanced() {
        let totals = TrialBalanceTotals {
            debit: Money::from_cents(123_456),
            credit: Money::from_cents(123_456),
        };
        assert!(totals.is_balanced());

        let off = TrialBalanceTotals {
            debit: Money::from_cents(123_457),
            credit: Money::from_cents(123_456),
        };
        assert!(!off.is_balanced());
        assert_eq!(off.difference(), Money::from_cents(1));
    }
}
