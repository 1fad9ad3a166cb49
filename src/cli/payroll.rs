//! CLI commands for payroll tax

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use super::parse_money_arg;
use crate::config::{Settings, TaxTableSet};
use crate::display::format_payslip;
use crate::engine::{compute_payslip, monthly_paye, monthly_uif};
use crate::error::{RigelError, RigelResult};
use crate::export::export_payslip_csv;
use crate::models::PayrollEntry;

/// Payroll subcommands
#[derive(Subcommand, Debug)]
pub enum PayrollCommands {
    /// Compute a full monthly payslip
    Slip {
        /// Basic monthly salary
        #[arg(short, long)]
        basic: String,

        /// Monthly allowances
        #[arg(short, long, default_value = "0")]
        allowances: String,

        /// Overtime pay
        #[arg(short, long, default_value = "0")]
        overtime: String,

        /// Medical aid contribution (deduction)
        #[arg(short, long, default_value = "0")]
        medical: String,

        /// Pension fund contribution (deduction)
        #[arg(short, long, default_value = "0")]
        pension: String,

        /// Tax year (defaults to the configured year)
        #[arg(short, long)]
        year: Option<u16>,

        /// Export to CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Compute monthly PAYE only
    Paye {
        /// Gross monthly salary
        #[arg(short, long)]
        gross: String,

        /// Tax year (defaults to the configured year)
        #[arg(short, long)]
        year: Option<u16>,
    },

    /// Compute the monthly UIF contribution only
    Uif {
        /// Gross monthly salary
        #[arg(short, long)]
        gross: String,

        /// Tax year (defaults to the configured year)
        #[arg(short, long)]
        year: Option<u16>,
    },
}

/// Handle payroll commands
pub fn handle_payroll_command(
    settings: &Settings,
    tables: &TaxTableSet,
    cmd: PayrollCommands,
) -> RigelResult<()> {
    match cmd {
        PayrollCommands::Slip {
            basic,
            allowances,
            overtime,
            medical,
            pension,
            year,
            output,
        } => {
            let table = tables.for_year(year.unwrap_or(settings.default_tax_year))?;
            let entry = PayrollEntry {
                basic_salary: parse_money_arg(&basic)?,
                allowances: parse_money_arg(&allowances)?,
                overtime_pay: parse_money_arg(&overtime)?,
                medical_aid: parse_money_arg(&medical)?,
                pension_fund: parse_money_arg(&pension)?,
            };
            let payslip = compute_payslip(&entry, table);

            if let Some(path) = output {
                let file = File::create(&path)
                    .map_err(|e| RigelError::Export(format!("Failed to create file: {}", e)))?;
                let mut writer = BufWriter::new(file);
                export_payslip_csv(&entry, &payslip, &mut writer)?;
                println!("Payslip exported to {}", path.display());
            } else {
                print!("{}", format_payslip(&entry, &payslip));
            }
            Ok(())
        }
        PayrollCommands::Paye { gross, year } => {
            let table = tables.for_year(year.unwrap_or(settings.default_tax_year))?;
            let paye = monthly_paye(parse_money_arg(&gross)?, table);
            println!("Monthly PAYE: {}", paye);
            Ok(())
        }
        PayrollCommands::Uif { gross, year } => {
            let table = tables.for_year(year.unwrap_or(settings.default_tax_year))?;
            let uif = monthly_uif(parse_money_arg(&gross)?, table);
            println!("Monthly UIF: {}", uif);
            Ok(())
        }
    }
}
