//! Payroll data models
//!
//! Captures a single employee's monthly pay components and the computed
//! payslip figures produced by the payroll tax engine.

use serde::{Deserialize, Serialize};

use super::Money;

/// Monthly pay components for one employee, as captured on the payroll form
///
/// Medical aid and pension fund are pass-through deductions supplied by the
/// caller, not computed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Basic monthly salary
    pub basic_salary: Money,
    /// Monthly allowances (travel, cellphone, etc.)
    #[serde(default)]
    pub allowances: Money,
    /// Overtime pay for the month
    #[serde(default)]
    pub overtime_pay: Money,
    /// Employee medical aid contribution (deduction)
    #[serde(default)]
    pub medical_aid: Money,
    /// Employee pension fund contribution (deduction)
    #[serde(default)]
    pub pension_fund: Money,
}

impl PayrollEntry {
    /// Gross monthly salary: basic + allowances + overtime
    pub fn gross_salary(&self) -> Money {
        self.basic_salary + self.allowances + self.overtime_pay
    }
}

/// Computed monthly payslip figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Gross monthly salary
    pub gross_salary: Money,
    /// PAYE withheld for the month
    pub paye_tax: Money,
    /// UIF employee contribution for the month
    pub uif: Money,
    /// Employee medical aid contribution (pass-through)
    pub medical_aid: Money,
    /// Employee pension fund contribution (pass-through)
    pub pension_fund: Money,
    /// Sum of all deductions: paye + uif + medical aid + pension
    pub total_deductions: Money,
    /// Gross less total deductions; may be negative when pass-through
    /// deductions exceed gross (deliberately not clamped)
    pub net_salary: Money,
}
