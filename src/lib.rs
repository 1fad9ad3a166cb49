//! Rigel Tax - SA tax and payroll computation engine
//!
//! This library provides the calculation core of the Rigel financial
//! management product for South African SMEs: deferred tax, payroll tax
//! (PAYE/UIF), trial-balance aggregation, VAT estimation, and loan/asset
//! schedules. All calculations are pure functions over value records;
//! persistence belongs to the hosted backend and is out of scope here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, user settings, and tax-year bracket tables
//! - `error`: Custom error types
//! - `models`: Core value records (money, categories, postings, loans, ...)
//! - `engine`: The pure calculators
//! - `import`: CSV posting import
//! - `reports`: Trial balance and deferred tax reports
//! - `display`: Terminal formatting for payslips and schedules
//! - `export`: CSV export helpers
//! - `cli`: Command handlers for the `rigel` binary
//!
//! # Example
//!
//! ```rust
//! use rigel_tax::config::TaxYearTable;
//! use rigel_tax::engine::monthly_paye;
//! use rigel_tax::models::Money;
//!
//! let table = TaxYearTable::sars_2024();
//! let paye = monthly_paye(Money::from_rands(30_000), &table);
//! assert!(paye.is_positive());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;

pub use error::RigelError;
