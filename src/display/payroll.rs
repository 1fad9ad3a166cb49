//! Payslip display formatting

use crate::models::{PayrollEntry, Payslip};

/// Format a computed payslip for terminal output
pub fn format_payslip(entry: &PayrollEntry, payslip: &Payslip) -> String {
    let mut output = String::new();

    output.push_str("Monthly Payslip\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');

    output.push_str(&format!(
        "{:<24} {:>14}\n",
        "Basic salary",
        entry.basic_salary.to_string()
    ));
    if !entry.allowances.is_zero() {
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Allowances",
            entry.allowances.to_string()
        ));
    }
    if !entry.overtime_pay.is_zero() {
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Overtime",
            entry.overtime_pay.to_string()
        ));
    }
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{:<24} {:>14}\n",
        "Gross salary",
        payslip.gross_salary.to_string()
    ));
    output.push('\n');

    output.push_str(&format!(
        "{:<24} {:>14}\n",
        "PAYE",
        payslip.paye_tax.to_string()
    ));
    output.push_str(&format!("{:<24} {:>14}\n", "UIF", payslip.uif.to_string()));
    if !payslip.medical_aid.is_zero() {
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Medical aid",
            payslip.medical_aid.to_string()
        ));
    }
    if !payslip.pension_fund.is_zero() {
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Pension fund",
            payslip.pension_fund.to_string()
        ));
    }
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{:<24} {:>14}\n",
        "Total deductions",
        payslip.total_deductions.to_string()
    ));
    output.push_str(&format!(
        "{:<24} {:>14}\n",
        "Net salary",
        payslip.net_salary.to_string()
    ));

    if payslip.net_salary.is_negative() {
        output.push_str("\nWarning: deductions exceed gross salary.\n");
    }

    output
}
