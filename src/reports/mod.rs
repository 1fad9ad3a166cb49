//! Report generation
//!
//! Structured reports built on the engines: generate, format for the
//! terminal, and export to CSV.

pub mod deferred_tax;
pub mod trial_balance;

pub use deferred_tax::DeferredTaxReport;
pub use trial_balance::TrialBalanceReport;
