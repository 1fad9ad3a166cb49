//! CLI commands for fixed-asset depreciation

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use super::{parse_date_arg, parse_money_arg};
use crate::display::format_depreciation;
use crate::engine::build_depreciation_schedule;
use crate::error::{RigelError, RigelResult};
use crate::export::export_depreciation_csv;
use crate::models::{Asset, DepreciationMethod};

/// Asset subcommands
#[derive(Subcommand, Debug)]
pub enum AssetCommands {
    /// Build a monthly depreciation schedule
    Schedule {
        /// Asset description
        #[arg(short, long, default_value = "Asset")]
        description: String,

        /// Acquisition cost
        #[arg(short, long)]
        cost: String,

        /// Residual value at the end of the useful life
        #[arg(long, default_value = "0")]
        residual: String,

        /// Useful life in months
        #[arg(short, long)]
        life: u32,

        /// Declining-balance annual rate percentage; straight-line when absent
        #[arg(long)]
        declining_rate: Option<f64>,

        /// Date brought into use (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        start: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle asset commands
pub fn handle_asset_command(cmd: AssetCommands) -> RigelResult<()> {
    match cmd {
        AssetCommands::Schedule {
            description,
            cost,
            residual,
            life,
            declining_rate,
            start,
            output,
        } => {
            let method = match declining_rate {
                Some(rate_pct) => DepreciationMethod::DecliningBalance { rate_pct },
                None => DepreciationMethod::StraightLine,
            };
            let asset = Asset {
                description,
                cost: parse_money_arg(&cost)?,
                residual_value: parse_money_arg(&residual)?,
                useful_life_months: life,
                method,
                start_date: parse_date_arg(start.as_deref())?,
            };
            let schedule = build_depreciation_schedule(&asset)?;

            if let Some(path) = output {
                let file = File::create(&path)
                    .map_err(|e| RigelError::Export(format!("Failed to create file: {}", e)))?;
                let mut writer = BufWriter::new(file);
                export_depreciation_csv(&schedule, &mut writer)?;
                println!("Schedule exported to {}", path.display());
            } else {
                print!("{}", format_depreciation(&schedule));
            }
            Ok(())
        }
    }
}
