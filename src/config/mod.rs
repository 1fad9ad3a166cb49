//! Configuration for the Rigel tax CLI
//!
//! Path resolution, user settings, and the tax-year bracket tables that
//! parameterise the payroll engine.

pub mod paths;
pub mod settings;
pub mod tax_tables;

pub use paths::RigelPaths;
pub use settings::Settings;
pub use tax_tables::{TaxBracket, TaxTableSet, TaxYearTable};
