mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};

use recordkeep_core::{ConsolePresenter, Presenter};
use recordkeep_finance::FinanceApp;
use recordkeep_health::{HealthSystem, PatientId};
use recordkeep_inventory::InventoryApp;
use recordkeep_warehouse::WarehouseManager;

use crate::config::Config;

/// Record-keeping demos over a shared in-memory repository.
#[derive(Parser)]
#[command(name = "recordkeep")]
#[command(about = "Warehouse, health, finance, inventory and grading record keeping", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed both stock categories, list them, then exercise the failure paths
    Warehouse,
    /// Seed patients and prescriptions and list one patient's prescriptions
    Health {
        #[arg(short, long, default_value_t = 2)]
        patient: u32,
    },
    /// Run three transactions against a savings account
    Finance,
    /// Save sample items to a JSON file and reload them in a new session
    Inventory {
        /// Defaults to `inventory.json` in the data directory
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Turn an `id,name,score` file into a grade report
    Grades {
        /// Defaults to `input.txt` in the data directory
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Defaults to `report.txt` in the data directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("invalid configuration")?;
    recordkeep_observability::init(&config.log);

    let mut out = ConsolePresenter;

    match cli.command {
        Commands::Warehouse => {
            let mut manager = WarehouseManager::new();
            manager.run_demo(Local::now().date_naive(), &mut out);
        }
        Commands::Health { patient } => {
            let mut system = HealthSystem::new();
            system.run_demo(Local::now().date_naive(), PatientId::new(patient), &mut out);
        }
        Commands::Finance => {
            FinanceApp::run(Local::now().date_naive(), &mut out)
                .context("finance simulation could not be set up")?;
        }
        Commands::Inventory { file } => {
            let path = file.unwrap_or_else(|| config.data_file("inventory.json"));
            tracing::debug!(path = %path.display(), "inventory file");
            InventoryApp::run_session(path, Utc::now(), &mut out);
        }
        Commands::Grades { input, output } => {
            let input = input.unwrap_or_else(|| config.data_file("input.txt"));
            let output = output.unwrap_or_else(|| config.data_file("report.txt"));
            let written = recordkeep_grading::generate_report(&input, &output)
                .with_context(|| format!("grade report from {} failed", input.display()))?;
            out.line(&format!(
                "Report generated for {written} students at {}",
                output.display()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_is_answered_by_the_parser_alone() {
        let err = Cli::try_parse_from(["recordkeep", "--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn grades_paths_are_optional_overrides() {
        let cli = Cli::try_parse_from(["recordkeep", "grades", "-i", "in.txt"]).unwrap();
        match cli.command {
            Commands::Grades { input, output } => {
                assert_eq!(input, Some(PathBuf::from("in.txt")));
                assert_eq!(output, None);
            }
            _ => panic!("expected grades subcommand"),
        }
    }

    #[test]
    fn health_patient_defaults_to_two() {
        let cli = Cli::try_parse_from(["recordkeep", "health"]).unwrap();
        assert!(matches!(cli.command, Commands::Health { patient: 2 }));
    }
}
