//! Due Diligence Tracker command-line front end
//!
//! Thin presentation layer: parses arguments, calls backend commands, and
//! prints their results.

mod cli;
mod views;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use cli::{Cli, Commands};
use dd_tracker_lib::commands::{self, AddItemRequest, UpdateItemRequest};
use dd_tracker_lib::config::AppConfig;
use dd_tracker_lib::domain::DomainError;
use dd_tracker_lib::AppState;
use rolling_logger::{LevelFilter, LoggerConfig};

/// Exit status for input the user can correct (unknown id, bad status or date)
const EXIT_INVALID_INPUT: i32 = 2;
/// Exit status for everything else, including an unusable database
const EXIT_FAILURE: i32 = 1;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::default()
        .with_db_path(cli.db)
        .with_log_dir(cli.log_dir);

    let logger_config = LoggerConfig {
        level: if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO },
        ..Default::default()
    };
    if let Err(e) = rolling_logger::init_logger(&config.log_dir, "DDTracker", logger_config) {
        eprintln!("Logging disabled: {}", e);
    }
    let _ = rolling_logger::info(&format!("Opening store at {}", config.db_path.display()));

    let state = AppState::open(config).context("Failed to open the checklist database")?;
    let seeded = commands::initialize(&state).context("Failed to initialize the checklist database")?;

    match cli.command {
        Commands::Init => {
            if seeded > 0 {
                println!("Seeded {} standard checklist items into {}", seeded, state.db_path().display());
            } else {
                println!("Database already initialized at {}", state.db_path().display());
            }
        }
        Commands::Dashboard => {
            let dash = commands::dashboard(&state)?;
            if cli.json {
                print_json(&dash)?;
            } else {
                print!("{}", views::dashboard(&dash));
            }
        }
        Commands::List { category, status } => {
            let items = commands::list_items(&state, category, status)?;
            if cli.json {
                print_json(&items)?;
            } else {
                print!("{}", views::item_table(&items));
            }
        }
        Commands::Show { id } => {
            let item = commands::get_item(&state, id)?;
            if cli.json {
                print_json(&item)?;
            } else {
                print!("{}", views::item_detail(&item));
            }
        }
        Commands::Add(args) => {
            let item = commands::add_item(
                &state,
                AddItemRequest {
                    category: args.category,
                    item_name: args.name,
                    status: args.status,
                    responsible_party: args.responsible,
                    due_date: args.due,
                    notes: args.notes,
                },
            )?;
            if cli.json {
                print_json(&item)?;
            } else {
                println!("Added item #{}", item.id);
            }
        }
        Commands::Update(args) => {
            let id = args.id;
            let item = commands::update_item(
                &state,
                id,
                UpdateItemRequest {
                    category: args.category,
                    item_name: args.name,
                    status: args.status,
                    responsible_party: args.responsible,
                    due_date: args.due,
                    notes: args.notes,
                },
            )?;
            if cli.json {
                print_json(&item)?;
            } else {
                print!("{}", views::item_detail(&item));
            }
        }
        Commands::Categories => {
            let categories = commands::list_categories(&state)?;
            if cli.json {
                print_json(&categories)?;
            } else {
                categories.iter().for_each(|c| println!("{}", c));
            }
        }
        Commands::Property { name } => {
            let info = match name {
                Some(name) => commands::set_property_name(&state, name)?,
                None => commands::get_property_info(&state)?,
            };
            if cli.json {
                print_json(&info)?;
            } else {
                println!("{}", info.property_name);
            }
        }
        Commands::Report { out, out_dir } => {
            let report = commands::generate_report(&state)?;
            let target = out.or_else(|| out_dir.map(|dir| dir.join(&report.file_name)));
            match target {
                Some(path) => {
                    std::fs::write(&path, &report.markdown)
                        .with_context(|| format!("Failed to write report to {}", path.display()))?;
                    println!("Report written to {}", path.display());
                }
                None if cli.json => print_json(&report)?,
                None => print!("{}", report.markdown),
            }
        }
    }
    Ok(())
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<DomainError>() {
        Some(e) if e.is_recoverable() => EXIT_INVALID_INPUT,
        _ => EXIT_FAILURE,
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        let message = format!("{:#}", e);
        // The logger echoes errors to stderr itself
        if rolling_logger::error(&message).is_err() {
            eprintln!("Error: {}", message);
        }
        std::process::exit(exit_code(&e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_by_error_kind() {
        let not_found = anyhow::Error::from(DomainError::item_not_found(4));
        assert_eq!(exit_code(&not_found), EXIT_INVALID_INPUT);

        let invalid: std::result::Result<(), DomainError> = Err(DomainError::validation("bad date"));
        let wrapped = invalid.context("Failed to add item").unwrap_err();
        assert_eq!(exit_code(&wrapped), EXIT_INVALID_INPUT);

        let storage = anyhow::Error::from(DomainError::StorageUnavailable("disk I/O error".into()));
        assert_eq!(exit_code(&storage), EXIT_FAILURE);
        assert_eq!(exit_code(&anyhow::anyhow!("report write failed")), EXIT_FAILURE);
    }
}
