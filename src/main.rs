use anyhow::Result;
use clap::{Parser, Subcommand};

use rigel_tax::cli::{
    handle_asset_command, handle_deferred_command, handle_ledger_command, handle_loan_command,
    handle_payroll_command, handle_tables_command,
};
use rigel_tax::config::{paths::RigelPaths, settings::Settings, tax_tables::TaxTableSet};

#[derive(Parser)]
#[command(
    name = "rigel",
    version,
    about = "SA tax and payroll calculator for SMEs",
    long_about = "Rigel's tax computation engine on the command line: deferred tax, \
                  PAYE/UIF payroll tax, trial balance aggregation, VAT estimates, \
                  and loan/asset schedules."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Deferred tax calculations
    #[command(subcommand, alias = "dt")]
    Deferred(rigel_tax::cli::DeferredCommands),

    /// Payroll tax calculations (PAYE, UIF, payslips)
    #[command(subcommand)]
    Payroll(rigel_tax::cli::PayrollCommands),

    /// Trial balance and VAT
    #[command(subcommand)]
    Ledger(rigel_tax::cli::LedgerCommands),

    /// Loan amortization schedules
    #[command(subcommand)]
    Loan(rigel_tax::cli::LoanCommands),

    /// Fixed-asset depreciation schedules
    #[command(subcommand)]
    Asset(rigel_tax::cli::AssetCommands),

    /// Tax-year bracket tables
    #[command(subcommand)]
    Tables(rigel_tax::cli::TablesCommands),

    /// Initialize the configuration directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings, and tax tables
    let paths = RigelPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let tables = TaxTableSet::load(&paths)?;

    match cli.command {
        Some(Commands::Deferred(cmd)) => {
            handle_deferred_command(&settings, cmd)?;
        }
        Some(Commands::Payroll(cmd)) => {
            handle_payroll_command(&settings, &tables, cmd)?;
        }
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&settings, cmd)?;
        }
        Some(Commands::Loan(cmd)) => {
            handle_loan_command(cmd)?;
        }
        Some(Commands::Asset(cmd)) => {
            handle_asset_command(cmd)?;
        }
        Some(Commands::Tables(cmd)) => {
            handle_tables_command(&tables, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Rigel at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Built-in tax tables cover: {:?}", tables.years());
            println!(
                "Add further years in {}",
                paths.tax_tables_file().display()
            );
        }
        Some(Commands::Config) => {
            println!("Rigel Configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Tax tables file:  {}", paths.tax_tables_file().display());
            println!();
            println!("Settings:");
            println!("  Default tax year: {}", settings.default_tax_year);
            println!("  VAT rate:         {}", settings.vat_rate);
            println!("  Multi-entity:     {}", settings.multi_entity);
            println!("  Available years:  {:?}", tables.years());
        }
        None => {
            println!("Rigel - SA tax and payroll calculator");
            println!();
            println!("Run 'rigel --help' for usage information.");
        }
    }

    Ok(())
}
