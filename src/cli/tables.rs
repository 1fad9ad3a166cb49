//! CLI commands for tax-year tables

use clap::Subcommand;

use crate::config::TaxTableSet;
use crate::error::RigelResult;

/// Tax table subcommands
#[derive(Subcommand, Debug)]
pub enum TablesCommands {
    /// List the available tax years
    List,

    /// Show the brackets for a tax year
    Show {
        /// Tax year (e.g. 2024)
        year: u16,
    },
}

/// Handle tax table commands
pub fn handle_tables_command(tables: &TaxTableSet, cmd: TablesCommands) -> RigelResult<()> {
    match cmd {
        TablesCommands::List => {
            println!("Available tax years:");
            for year in tables.years() {
                println!("  {}", year);
            }
            Ok(())
        }
        TablesCommands::Show { year } => {
            let table = tables.for_year(year)?;

            println!("Tax year {}", table.year);
            println!("{:<22} {:>14} {:>8}", "Annual income up to", "Base", "Rate");
            for bracket in &table.brackets {
                let upper = match bracket.up_to {
                    Some(upper) => upper.to_string(),
                    None => "and above".to_string(),
                };
                println!(
                    "{:<22} {:>14} {:>7.0}%",
                    upper,
                    bracket.base.to_string(),
                    bracket.rate * 100.0
                );
            }
            println!("Primary rebate: {}", table.primary_rebate);
            println!(
                "UIF: {:.0}% capped at {}/month",
                table.uif_rate * 100.0,
                table.uif_monthly_cap
            );
            Ok(())
        }
    }
}
