//! Core data models for the Rigel tax engine
//!
//! This module contains the value records that flow through the calculators:
//! money, deferred tax categories and losses, payroll entries, ledger
//! postings, and loan/asset schedule inputs.

pub mod deferred;
pub mod ledger;
pub mod loan;
pub mod money;
pub mod payroll;

pub use deferred::{
    CategoryComputation, CategoryKind, DeferredTaxSummary, LossType, SummaryBucket,
    TaxLossCarryForward, TemporaryDifferenceCategory, MAIN_ENTITY,
};
pub use ledger::{AccountKind, Posting, TrialBalanceRow, TrialBalanceTotals};
pub use loan::{AmortizationEntry, Asset, DepreciationEntry, DepreciationMethod, Loan};
pub use money::Money;
pub use payroll::{PayrollEntry, Payslip};
