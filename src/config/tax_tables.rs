//! Tax-year bracket tables
//!
//! The PAYE bracket table and primary rebate change every tax year, so they
//! are configuration rather than logic: the payroll engine takes a
//! [`TaxYearTable`] as a parameter. The 2024 SARS table ships built in;
//! further years can be supplied in a `tax_tables.yaml` file, which also
//! overrides built-in years when it names them.

use serde::{Deserialize, Serialize};

use super::paths::RigelPaths;
use crate::error::{RigelError, RigelResult};
use crate::models::Money;

/// One progressive tax bracket
///
/// Applies to annual taxable income up to and including `up_to` (inclusive
/// upper bound; `None` marks the open top bracket). Tax within the bracket
/// is `base + (income - above) * rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound of annual income for this bracket, in cents;
    /// None for the top bracket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to: Option<Money>,
    /// Tax on income up to the bracket floor, in cents
    pub base: Money,
    /// Bracket floor: the income level above which the marginal rate applies
    pub above: Money,
    /// Marginal rate as a fraction in [0, 1]
    pub rate: f64,
}

/// A full year's payroll tax parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxYearTable {
    /// Tax year (year of assessment ending February, e.g. 2024)
    pub year: u16,
    /// Progressive brackets in ascending order; the last has `up_to: None`
    pub brackets: Vec<TaxBracket>,
    /// Annual primary rebate, in cents
    pub primary_rebate: Money,
    /// UIF employee contribution rate as a fraction (0.01)
    pub uif_rate: f64,
    /// Monthly UIF contribution ceiling, in cents
    pub uif_monthly_cap: Money,
}

impl TaxYearTable {
    /// The built-in 2024 South African tax year table
    pub fn sars_2024() -> Self {
        Self {
            year: 2024,
            brackets: vec![
                TaxBracket {
                    up_to: Some(Money::from_rands(237_100)),
                    base: Money::zero(),
                    above: Money::zero(),
                    rate: 0.18,
                },
                TaxBracket {
                    up_to: Some(Money::from_rands(370_500)),
                    base: Money::from_rands(42_678),
                    above: Money::from_rands(237_100),
                    rate: 0.26,
                },
                TaxBracket {
                    up_to: Some(Money::from_rands(512_800)),
                    base: Money::from_rands(77_362),
                    above: Money::from_rands(370_500),
                    rate: 0.31,
                },
                TaxBracket {
                    up_to: Some(Money::from_rands(673_000)),
                    base: Money::from_rands(121_475),
                    above: Money::from_rands(512_800),
                    rate: 0.36,
                },
                TaxBracket {
                    up_to: Some(Money::from_rands(857_900)),
                    base: Money::from_rands(179_147),
                    above: Money::from_rands(673_000),
                    rate: 0.39,
                },
                TaxBracket {
                    up_to: None,
                    base: Money::from_rands(251_258),
                    above: Money::from_rands(857_900),
                    rate: 0.41,
                },
            ],
            primary_rebate: Money::from_rands(17_235),
            uif_rate: 0.01,
            uif_monthly_cap: Money::from_cents(17_712),
        }
    }

    /// Annual tax before rebates for the given annual taxable income
    ///
    /// Bracket upper bounds are inclusive; the first matching bracket in
    /// ascending order applies.
    pub fn annual_tax_before_rebate(&self, annual_income: Money) -> Money {
        for bracket in &self.brackets {
            let within = match bracket.up_to {
                Some(upper) => annual_income <= upper,
                None => true,
            };
            if within {
                return bracket.base + (annual_income - bracket.above).mul_rate(bracket.rate);
            }
        }
        // Brackets always end in an open top bracket; an empty table is a
        // configuration error surfaced by validate()
        Money::zero()
    }

    /// Sanity-check a table loaded from configuration
    pub fn validate(&self) -> RigelResult<()> {
        if self.brackets.is_empty() {
            return Err(RigelError::Config(format!(
                "Tax year {} has no brackets",
                self.year
            )));
        }
        if self.brackets.last().map(|b| b.up_to).unwrap_or(None).is_some() {
            return Err(RigelError::Config(format!(
                "Tax year {}: last bracket must be open-ended",
                self.year
            )));
        }
        let mut prev_upper = None;
        for bracket in &self.brackets {
            if !(0.0..=1.0).contains(&bracket.rate) {
                return Err(RigelError::Config(format!(
                    "Tax year {}: bracket rate {} out of range",
                    self.year, bracket.rate
                )));
            }
            if let (Some(prev), Some(upper)) = (prev_upper, bracket.up_to) {
                if upper <= prev {
                    return Err(RigelError::Config(format!(
                        "Tax year {}: bracket bounds not ascending",
                        self.year
                    )));
                }
            }
            prev_upper = bracket.up_to;
        }
        Ok(())
    }
}

/// The set of tax-year tables known to this installation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxTableSet {
    /// Tables keyed by year; later entries with a duplicate year win
    pub tables: Vec<TaxYearTable>,
}

impl TaxTableSet {
    /// The built-in set (currently 2024 only)
    pub fn builtin() -> Self {
        Self {
            tables: vec![TaxYearTable::sars_2024()],
        }
    }

    /// Load the built-in set merged with the user's `tax_tables.yaml`
    /// (if present); file entries override built-in years
    pub fn load(paths: &RigelPaths) -> RigelResult<Self> {
        let mut set = Self::builtin();

        let file = paths.tax_tables_file();
        if file.exists() {
            let contents = std::fs::read_to_string(&file)
                .map_err(|e| RigelError::Io(format!("Failed to read tax tables: {}", e)))?;
            let loaded: Vec<TaxYearTable> = serde_yaml::from_str(&contents)
                .map_err(|e| RigelError::Config(format!("Failed to parse tax tables: {}", e)))?;

            for table in loaded {
                table.validate()?;
                set.tables.retain(|t| t.year != table.year);
                set.tables.push(table);
            }
        }

        set.tables.sort_by_key(|t| t.year);
        Ok(set)
    }

    /// Look up the table for a tax year
    pub fn for_year(&self, year: u16) -> RigelResult<&TaxYearTable> {
        self.tables
            .iter()
            .find(|t| t.year == year)
            .ok_or(RigelError::TaxTable(year))
    }

    /// Years available, ascending
    pub fn years(&self) -> Vec<u16> {
        self.tables.iter().map(|t| t.year).collect()
    }
}
