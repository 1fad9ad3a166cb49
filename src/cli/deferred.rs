//! CLI commands for deferred tax
//!
//! Single-category and tax-loss calculations from arguments, and a full
//! report generated from a JSON input file of categories and losses.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;
use serde::{Deserialize, Serialize};

use super::parse_money_arg;
use crate::config::Settings;
use crate::engine::{compute_category, compute_tax_loss};
use crate::error::{RigelError, RigelResult};
use crate::models::{
    CategoryKind, LossType, TaxLossCarryForward, TemporaryDifferenceCategory,
};
use crate::reports::DeferredTaxReport;

/// Deferred tax subcommands
#[derive(Subcommand, Debug)]
pub enum DeferredCommands {
    /// Compute the deferred tax on a single temporary-difference category
    Category {
        /// Category description
        #[arg(short, long, default_value = "Category")]
        description: String,

        /// Category kind
        #[arg(short, long, value_enum)]
        kind: CategoryKindArg,

        /// Book (carrying) value
        #[arg(short, long)]
        book: String,

        /// Tax base
        #[arg(short, long)]
        tax: String,

        /// Applicable tax rate as a fraction (e.g. 0.27)
        #[arg(short, long)]
        rate: f64,

        /// Treat the recognition criteria as not met
        #[arg(long)]
        unrecognised: bool,
    },

    /// Compute the deferred tax asset on a tax-loss carry-forward
    Loss {
        /// Loss amount
        #[arg(short, long)]
        amount: String,

        /// Tax rate as a fraction (e.g. 0.27)
        #[arg(short, long)]
        rate: f64,

        /// Probability of utilization as a fraction (e.g. 0.75)
        #[arg(short, long, default_value = "1.0")]
        probability: f64,
    },

    /// Generate a full deferred tax report from a JSON input file
    Report {
        /// Path to the JSON input file (categories and tax losses)
        input: PathBuf,

        /// Tax rate applied to tax losses (e.g. 0.27)
        #[arg(short, long, default_value = "0.27")]
        rate: f64,

        /// Group the summary by entity
        #[arg(long)]
        multi_entity: bool,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// clap-friendly mirror of [`CategoryKind`]
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryKindArg {
    Taxable,
    Deductible,
    InitialRecognition,
    Uncertain,
}

impl From<CategoryKindArg> for CategoryKind {
    fn from(arg: CategoryKindArg) -> Self {
        match arg {
            CategoryKindArg::Taxable => CategoryKind::TemporaryTaxable,
            CategoryKindArg::Deductible => CategoryKind::TemporaryDeductible,
            CategoryKindArg::InitialRecognition => CategoryKind::InitialRecognition,
            CategoryKindArg::Uncertain => CategoryKind::UncertainPositions,
        }
    }
}

/// JSON input file shape for the report command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeferredInput {
    /// Temporary-difference categories
    #[serde(default)]
    pub categories: Vec<TemporaryDifferenceCategory>,
    /// Tax-loss carry-forwards
    #[serde(default)]
    pub tax_losses: Vec<TaxLossCarryForward>,
}

/// Handle deferred tax commands
pub fn handle_deferred_command(settings: &Settings, cmd: DeferredCommands) -> RigelResult<()> {
    match cmd {
        DeferredCommands::Category {
            description,
            kind,
            book,
            tax,
            rate,
            unrecognised,
        } => {
            validate_rate(rate, "tax rate")?;
            let category = TemporaryDifferenceCategory {
                description,
                kind: kind.into(),
                book_value: parse_money_arg(&book)?,
                tax_value: parse_money_arg(&tax)?,
                applicable_tax_rate: rate,
                recognition_criteria_met: !unrecognised,
                entity_name: None,
            };
            let result = compute_category(&category);

            println!("Temporary difference: {}", result.temporary_difference);
            println!("Deferred tax asset:   {}", result.deferred_tax_asset);
            println!("Deferred tax liability: {}", result.deferred_tax_liability);
            if result.needs_manual_review {
                println!("Note: this category kind has no automatic routing; manual review required.");
            }
            Ok(())
        }
        DeferredCommands::Loss {
            amount,
            rate,
            probability,
        } => {
            validate_rate(rate, "tax rate")?;
            validate_rate(probability, "utilization probability")?;
            let loss = TaxLossCarryForward {
                loss_type: LossType::AssessedLoss,
                loss_amount: parse_money_arg(&amount)?,
                origination_year: 0,
                expiry_year: None,
                utilization_probability: probability,
                entity_name: None,
            };

            println!("Deferred tax asset: {}", compute_tax_loss(&loss, rate));
            Ok(())
        }
        DeferredCommands::Report {
            input,
            rate,
            multi_entity,
            output,
        } => {
            validate_rate(rate, "tax rate")?;
            let contents = std::fs::read_to_string(&input)
                .map_err(|e| RigelError::Io(format!("Failed to read {}: {}", input.display(), e)))?;
            let parsed: DeferredInput = serde_json::from_str(&contents)
                .map_err(|e| RigelError::Json(format!("Failed to parse input file: {}", e)))?;

            let report = DeferredTaxReport::generate(
                &parsed.categories,
                &parsed.tax_losses,
                rate,
                multi_entity || settings.multi_entity,
            );

            if let Some(path) = output {
                let file = File::create(&path)
                    .map_err(|e| RigelError::Export(format!("Failed to create file: {}", e)))?;
                let mut writer = BufWriter::new(file);
                report.export_csv(&mut writer)?;
                println!("Report exported to {}", path.display());
            } else {
                print!("{}", report.format_terminal());
            }
            Ok(())
        }
    }
}

fn validate_rate(rate: f64, name: &str) -> RigelResult<()> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(RigelError::validation(format!(
            "{} must be between 0 and 1, got {}",
            name, rate
        )));
    }
    Ok(())
}
