//! Export helpers
//!
//! CSV writers for schedules and payslips, shared with the report exporters.

pub mod csv;

pub use csv::{escape_csv, export_amortization_csv, export_depreciation_csv, export_payslip_csv};
