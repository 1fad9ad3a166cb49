//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the calculation engines.

pub mod asset;
pub mod deferred;
pub mod ledger;
pub mod loan;
pub mod payroll;
pub mod tables;

pub use asset::{handle_asset_command, AssetCommands};
pub use deferred::{handle_deferred_command, DeferredCommands};
pub use ledger::{handle_ledger_command, LedgerCommands};
pub use loan::{handle_loan_command, LoanCommands};
pub use payroll::{handle_payroll_command, PayrollCommands};
pub use tables::{handle_tables_command, TablesCommands};

use chrono::NaiveDate;

use crate::error::{RigelError, RigelResult};
use crate::models::Money;

/// Parse a rand amount argument ("25000", "25000.50", "R25000.50")
pub(crate) fn parse_money_arg(s: &str) -> RigelResult<Money> {
    Money::parse(s).map_err(|e| RigelError::validation(e.to_string()))
}

/// Parse a date argument (YYYY-MM-DD), defaulting to today when absent
pub(crate) fn parse_date_arg(s: Option<&str>) -> RigelResult<NaiveDate> {
    match s {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| RigelError::validation(format!("invalid date '{}', expected YYYY-MM-DD", text))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money_arg() {
        assert_eq!(parse_money_arg("25000.50").unwrap(), Money::from_cents(2_500_050));
        assert!(parse_money_arg("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg(Some("2024-02-29")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date_arg(Some("29/02/2024")).is_err());
        assert!(parse_date_arg(None).is_ok());
    }
}
