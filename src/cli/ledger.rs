//! CLI commands for the ledger: trial balance and VAT estimation

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use super::parse_money_arg;
use crate::config::Settings;
use crate::engine::estimate_vat;
use crate::error::{RigelError, RigelResult};
use crate::import::read_postings_file;
use crate::reports::TrialBalanceReport;

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Build a trial balance from a postings CSV file
    #[command(alias = "tb")]
    TrialBalance {
        /// Path to the postings CSV (code,name,type,debit,credit[,date])
        file: PathBuf,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Estimate VAT due from revenue and expense aggregates
    Vat {
        /// Total revenue for the period
        #[arg(short, long)]
        revenue: String,

        /// Total expenses for the period
        #[arg(short, long)]
        expenses: String,

        /// VAT rate as a fraction (defaults to the configured rate)
        #[arg(long)]
        rate: Option<f64>,
    },
}

/// Handle ledger commands
pub fn handle_ledger_command(settings: &Settings, cmd: LedgerCommands) -> RigelResult<()> {
    match cmd {
        LedgerCommands::TrialBalance { file, output } => {
            let postings = read_postings_file(&file)?;
            let report = TrialBalanceReport::generate(&postings);

            if let Some(path) = output {
                let file = File::create(&path)
                    .map_err(|e| RigelError::Export(format!("Failed to create file: {}", e)))?;
                let mut writer = BufWriter::new(file);
                report.export_csv(&mut writer)?;
                println!("Trial balance exported to {}", path.display());
            } else {
                print!("{}", report.format_terminal());
            }
            Ok(())
        }
        LedgerCommands::Vat {
            revenue,
            expenses,
            rate,
        } => {
            let rate = rate.unwrap_or(settings.vat_rate);
            if !(0.0..=1.0).contains(&rate) {
                return Err(RigelError::validation(format!(
                    "VAT rate must be between 0 and 1, got {}",
                    rate
                )));
            }

            let estimate = estimate_vat(parse_money_arg(&revenue)?, parse_money_arg(&expenses)?, rate);
            println!("Output VAT: {}", estimate.output_vat);
            println!("Input VAT:  {}", estimate.input_vat);
            println!("VAT due:    {}", estimate.vat_due);
            Ok(())
        }
    }
}
