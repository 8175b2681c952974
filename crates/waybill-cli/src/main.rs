//! Waybill CLI application
//!
//! Command-line interface and MCP server for the waybill trip planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, WaybillMcpServer};
use renderer::TerminalRenderer;
use waybill_core::{params::ListTrips, TripPlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        logs_dir,
        no_color,
        command,
    } = Args::parse();

    let planner = TripPlannerBuilder::new()
        .with_database_path(database_file)
        .with_logs_dir(logs_dir)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Waybill started, logs in {}", planner.logs_dir().display());

    match command {
        Some(Serve) => {
            info!("Starting Waybill MCP server");
            run_stdio_server(WaybillMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        Some(Driver { command }) => {
            Cli::new(planner, TerminalRenderer::new(!no_color))
                .handle_driver_command(command)
                .await
        }
        Some(Trip { command }) => {
            Cli::new(planner, TerminalRenderer::new(!no_color))
                .handle_trip_command(command)
                .await
        }
        Some(Schedule(args)) => {
            Cli::new(planner, TerminalRenderer::new(!no_color)).preview_schedule(args)
        }
        None => {
            Cli::new(planner, TerminalRenderer::new(!no_color))
                .list_trips(&ListTrips::default())
                .await
        }
    }
}
