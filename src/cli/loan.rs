//! CLI commands for loan amortization

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use super::{parse_date_arg, parse_money_arg};
use crate::display::format_amortization;
use crate::engine::{build_amortization_schedule, monthly_payment};
use crate::error::{RigelError, RigelResult};
use crate::export::export_amortization_csv;
use crate::models::Loan;

/// Loan subcommands
#[derive(Subcommand, Debug)]
pub enum LoanCommands {
    /// Compute the fixed monthly payment
    Payment {
        /// Principal amount
        #[arg(short, long)]
        principal: String,

        /// Annual interest rate as a percentage (e.g. 11.75)
        #[arg(short, long)]
        rate: f64,

        /// Term in months
        #[arg(short, long)]
        term: u32,
    },

    /// Build the full amortization schedule
    Schedule {
        /// Principal amount
        #[arg(short, long)]
        principal: String,

        /// Annual interest rate as a percentage (e.g. 11.75)
        #[arg(short, long)]
        rate: f64,

        /// Term in months
        #[arg(short, long)]
        term: u32,

        /// First payment date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        start: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle loan commands
pub fn handle_loan_command(cmd: LoanCommands) -> RigelResult<()> {
    match cmd {
        LoanCommands::Payment {
            principal,
            rate,
            term,
        } => {
            let loan = Loan {
                principal: parse_money_arg(&principal)?,
                annual_rate_pct: rate,
                term_months: term,
                start_date: parse_date_arg(None)?,
            };
            println!("Monthly payment: {}", monthly_payment(&loan)?);
            Ok(())
        }
        LoanCommands::Schedule {
            principal,
            rate,
            term,
            start,
            output,
        } => {
            let loan = Loan {
                principal: parse_money_arg(&principal)?,
                annual_rate_pct: rate,
                term_months: term,
                start_date: parse_date_arg(start.as_deref())?,
            };
            let schedule = build_amortization_schedule(&loan)?;

            if let Some(path) = output {
                let file = File::create(&path)
                    .map_err(|e| RigelError::Export(format!("Failed to create file: {}", e)))?;
                let mut writer = BufWriter::new(file);
                export_amortization_csv(&schedule, &mut writer)?;
                println!("Schedule exported to {}", path.display());
            } else {
                print!("{}", format_amortization(&schedule));
            }
            Ok(())
        }
    }
}
