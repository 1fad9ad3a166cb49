//! Schedule display formatting
//!
//! Terminal tables for amortization and depreciation schedules.

use crate::models::{AmortizationEntry, DepreciationEntry};

/// Format an amortization schedule as a terminal table
pub fn format_amortization(entries: &[AmortizationEntry]) -> String {
    if entries.is_empty() {
        return "Empty schedule.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<10}  {:>13}  {:>13}  {:>13}  {:>14}\n",
        "#", "Date", "Principal", "Interest", "Payment", "Balance"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for entry in entries {
        output.push_str(&format!(
            "{:>4}  {:<10}  {:>13}  {:>13}  {:>13}  {:>14}\n",
            entry.payment_number,
            entry.payment_date.to_string(),
            entry.principal_payment.to_string(),
            entry.interest_payment.to_string(),
            entry.total_payment.to_string(),
            entry.remaining_balance.to_string(),
        ));
    }

    output
}

/// Format a depreciation schedule as a terminal table
pub fn format_depreciation(entries: &[DepreciationEntry]) -> String {
    if entries.is_empty() {
        return "Empty schedule.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<10}  {:>14}  {:>14}  {:>14}\n",
        "#", "Date", "Depreciation", "Accumulated", "Book Value"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for entry in entries {
        output.push_str(&format!(
            "{:>4}  {:<10}  {:>14}  {:>14}  {:>14}\n",
            entry.period,
            entry.period_date.to_string(),
            entry.depreciation.to_string(),
            entry.accumulated.to_string(),
            entry.closing_book_value.to_string(),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_amortization_schedule;
    use crate::models::{Loan, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_format_amortization() {
        let loan = Loan {
            principal: Money::from_rands(12_000),
            annual_rate_pct: 0.0,
            term_months: 3,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        let schedule = build_amortization_schedule(&loan).unwrap();
        let text = format_amortization(&schedule);

        assert!(text.contains("Principal"));
        assert!(text.contains("2024-06-01"));
        assert!(text.contains("R4000.00"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_empty_schedule() {
        assert_eq!(format_amortization(&[]), "Empty schedule.\n");
        assert_eq!(format_depreciation(&[]), "Empty schedule.\n");
    }
}
