//! Calculation engines
//!
//! The computational core: pure, synchronous transformations from validated
//! value records to results. No I/O and no shared state; errors only arise
//! from boundary validation (loans, assets).

pub mod amortization;
pub mod deferred_tax;
pub mod depreciation;
pub mod payroll;
pub mod trial_balance;
pub mod vat;

pub use amortization::{build_schedule as build_amortization_schedule, monthly_payment};
pub use deferred_tax::{aggregate_summary, compute_category, compute_tax_loss};
pub use depreciation::build_schedule as build_depreciation_schedule;
pub use payroll::{compute_payslip, monthly_paye, monthly_uif};
pub use trial_balance::{build_trial_balance, TrialBalance};
pub use vat::{estimate_vat, VatEstimate};
