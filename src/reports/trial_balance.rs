//! Trial Balance Report
//!
//! Renders the aggregated trial balance in the line format used by the
//! hosted export (`{code}  {name}  {type}  Dr {debit}  Cr {credit}` per
//! account, followed by a totals line), and exports it as CSV.

use std::io::Write;

use crate::engine::{build_trial_balance, TrialBalance};
use crate::error::{RigelError, RigelResult};
use crate::models::{Posting, TrialBalanceRow, TrialBalanceTotals};

/// Trial Balance Report
#[derive(Debug, Clone)]
pub struct TrialBalanceReport {
    /// Aggregated rows, one per account
    pub rows: Vec<TrialBalanceRow>,
    /// Grand totals
    pub totals: TrialBalanceTotals,
}

impl TrialBalanceReport {
    /// Generate the report from a set of postings
    pub fn generate(postings: &[Posting]) -> Self {
        let TrialBalance { rows, totals } = build_trial_balance(postings);
        Self { rows, totals }
    }

    /// Format the report for terminal display
    ///
    /// Row lines follow the report-format contract:
    /// `{code}  {name}  {type}  Dr {debit}  Cr {credit}`
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Trial Balance\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No postings.\n");
            return output;
        }

        let name_width = self
            .rows
            .iter()
            .map(|r| r.name.len())
            .max()
            .unwrap_or(4)
            .max(4);

        for row in &self.rows {
            output.push_str(&format!(
                "{:<6}  {:<name_width$}  {:<9}  Dr {:>14}  Cr {:>14}\n",
                row.code,
                row.name,
                row.kind.to_string(),
                row.debit.to_string(),
                row.credit.to_string(),
                name_width = name_width,
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<6}  {:<name_width$}  {:<9}  Dr {:>14}  Cr {:>14}\n",
            "",
            "Totals",
            "",
            self.totals.debit.to_string(),
            self.totals.credit.to_string(),
            name_width = name_width,
        ));

        if self.totals.is_balanced() {
            output.push_str("Balanced.\n");
        } else {
            output.push_str(&format!(
                "OUT OF BALANCE by {}\n",
                self.totals.difference().abs()
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> RigelResult<()> {
        writeln!(writer, "Code,Name,Type,Debit,Credit")
            .map_err(|e| RigelError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{},{:.2},{:.2}",
                row.code,
                crate::export::escape_csv(&row.name),
                row.kind,
                row.debit.to_rands_f64(),
                row.credit.to_rands_f64(),
            )
            .map_err(|e| RigelError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTALS,,,{:.2},{:.2}",
            self.totals.debit.to_rands_f64(),
            self.totals.credit.to_rands_f64(),
        )
        .map_err(|e| RigelError::Export(e.to_string()))?;
        writeln!(writer, "BALANCED,,,{},", self.totals.is_balanced())
            .map_err(|e| RigelError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountKind, Money};

    fn posting(code: &str, name: &str, kind: AccountKind, debit: i64, credit: i64) -> Posting {
        Posting {
            account_code: code.into(),
            account_name: name.into(),
            account_kind: kind,
            debit: Money::from_cents(debit),
            credit: Money::from_cents(credit),
            date: None,
        }
    }

    fn sample_postings() -> Vec<Posting> {
        vec![
            posting("1000", "Bank", AccountKind::Asset, 150_000, 0),
            posting("4000", "Sales", AccountKind::Revenue, 0, 150_000),
        ]
    }

    #[test]
    fn test_format_terminal_row_contract() {
        let report = TrialBalanceReport::generate(&sample_postings());
        let text = report.format_terminal();

        // Row lines carry code, name, type, and Dr/Cr amounts in order
        let bank_line = text.lines().find(|l| l.contains("Bank")).unwrap();
        assert!(bank_line.starts_with("1000"));
        assert!(bank_line.contains("Asset"));
        assert!(bank_line.contains("Dr"));
        assert!(bank_line.contains("R1500.00"));
        assert!(text.contains("Balanced."));
    }

    #[test]
    fn test_format_terminal_unbalanced() {
        let mut postings = sample_postings();
        postings.push(posting("5000", "Rent", AccountKind::Expense, 500, 0));
        let report = TrialBalanceReport::generate(&postings);

        assert!(report.format_terminal().contains("OUT OF BALANCE by R5.00"));
    }

    #[test]
    fn test_csv_export() {
        let report = TrialBalanceReport::generate(&sample_postings());

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("Code,Name,Type,Debit,Credit"));
        assert!(csv_string.contains("1000,Bank,Asset,1500.00,0.00"));
        assert!(csv_string.contains("TOTALS,,,1500.00,1500.00"));
        assert!(csv_string.contains("BALANCED,,,true,"));
    }
}
