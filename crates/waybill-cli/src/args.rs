use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DriverCommands, ScheduleArgs, TripCommands};

/// Command-line trip planner producing hours-of-service duty logs
///
/// Waybill schedules a truck trip into duty days under simplified
/// hours-of-service rules (11h driving and 14h on duty per day, a 70h
/// cycle, a fuel stop every 1000 miles) and writes a visual duty log for
/// every stored trip. Run `wb serve` to expose the same operations to AI
/// assistants over MCP.
#[derive(Parser)]
#[command(version, about, name = "wb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waybill/waybill.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Directory duty log documents are written to. Defaults to
    /// $XDG_DATA_HOME/waybill/logs
    #[arg(long, global = true)]
    pub logs_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waybill CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage drivers and their cycle budgets
    #[command(alias = "d")]
    Driver {
        #[command(subcommand)]
        command: DriverCommands,
    },
    /// Plan and manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Preview a schedule without storing a trip
    Schedule(ScheduleArgs),
    /// Start the MCP server
    Serve,
}
