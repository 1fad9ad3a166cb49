//! CSV Export functionality
//!
//! Exports amortization/depreciation schedules and payslips to CSV format.
//! Reports carry their own CSV exporters; these are the standalone writers
//! for schedule and payroll output, plus the shared field escaper.

use std::io::Write;

use crate::error::{RigelError, RigelResult};
use crate::models::{AmortizationEntry, DepreciationEntry, PayrollEntry, Payslip};

/// Export an amortization schedule to CSV
pub fn export_amortization_csv<W: Write>(
    entries: &[AmortizationEntry],
    writer: &mut W,
) -> RigelResult<()> {
    writeln!(
        writer,
        "Payment Number,Payment Date,Principal,Interest,Total Payment,Remaining Balance"
    )
    .map_err(|e| RigelError::Export(e.to_string()))?;

    for entry in entries {
        writeln!(
            writer,
            "{},{},{:.2},{:.2},{:.2},{:.2}",
            entry.payment_number,
            entry.payment_date,
            entry.principal_payment.to_rands_f64(),
            entry.interest_payment.to_rands_f64(),
            entry.total_payment.to_rands_f64(),
            entry.remaining_balance.to_rands_f64(),
        )
        .map_err(|e| RigelError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export a depreciation schedule to CSV
pub fn export_depreciation_csv<W: Write>(
    entries: &[DepreciationEntry],
    writer: &mut W,
) -> RigelResult<()> {
    writeln!(
        writer,
        "Period,Date,Depreciation,Accumulated,Closing Book Value"
    )
    .map_err(|e| RigelError::Export(e.to_string()))?;

    for entry in entries {
        writeln!(
            writer,
            "{},{},{:.2},{:.2},{:.2}",
            entry.period,
            entry.period_date,
            entry.depreciation.to_rands_f64(),
            entry.accumulated.to_rands_f64(),
            entry.closing_book_value.to_rands_f64(),
        )
        .map_err(|e| RigelError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export a single payslip (inputs and computed figures) to CSV
pub fn export_payslip_csv<W: Write>(
    entry: &PayrollEntry,
    payslip: &Payslip,
    writer: &mut W,
) -> RigelResult<()> {
    writeln!(writer, "Component,Amount").map_err(|e| RigelError::Export(e.to_string()))?;

    let lines = [
        ("Basic Salary", entry.basic_salary),
        ("Allowances", entry.allowances),
        ("Overtime Pay", entry.overtime_pay),
        ("Gross Salary", payslip.gross_salary),
        ("PAYE", payslip.paye_tax),
        ("UIF", payslip.uif),
        ("Medical Aid", payslip.medical_aid),
        ("Pension Fund", payslip.pension_fund),
        ("Total Deductions", payslip.total_deductions),
        ("Net Salary", payslip.net_salary),
    ];
    for (label, amount) in lines {
        writeln!(writer, "{},{:.2}", label, amount.to_rands_f64())
            .map_err(|e| RigelError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a field for CSV output
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
