//! Display formatting for terminal output
//!
//! Hand-formatted tables for payslips and schedules; reports carry their own
//! terminal formatters.

pub mod payroll;
pub mod schedule;

pub use payroll::format_payslip;
pub use schedule::{format_amortization, format_depreciation};
