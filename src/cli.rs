//! Command-line arguments

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dd-tracker")]
#[command(about = "Track commercial real estate due diligence checklists")]
#[command(version)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, env = "DD_TRACKER_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, env = "DD_TRACKER_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Write debug records to the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database and seed the standard checklist
    Init,
    /// Overall progress, flagged issues and upcoming deadlines
    Dashboard,
    /// List checklist items
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one item
    Show { id: u32 },
    /// Add a checklist item
    Add(AddArgs),
    /// Update fields of an item; pass an empty string to clear an optional field
    Update(UpdateArgs),
    /// Categories in use plus the standard set
    Categories,
    /// Show or set the property name
    Property { name: Option<String> },
    /// Generate the Markdown status report
    Report {
        /// Write to this file instead of stdout
        #[arg(long, conflicts_with = "out_dir")]
        out: Option<PathBuf>,
        /// Write into this directory using the standard report file name
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub responsible: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: u32,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub responsible: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}
