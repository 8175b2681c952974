//! Command-line interface definitions and command handlers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so `waybill_core::params` stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripPlanner
//! ```
//!
//! [`Cli`] runs a parsed command against the planner and prints the
//! markdown result through the terminal renderer.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use waybill_core::{
    display::{CreateResult, DayPlans, DeleteResult, Drivers, OperationStatus, PlannedTrip, Trips},
    params::*,
    TripPlanner, WaybillError,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Driver arguments
// ============================================================================

/// Create a driver with a full 70-hour cycle
#[derive(Args)]
pub struct CreateDriverArgs {
    #[arg(help = "Driver name, printed on every log page")]
    pub name: String,
}

impl From<CreateDriverArgs> for CreateDriver {
    fn from(val: CreateDriverArgs) -> Self {
        CreateDriver { name: val.name }
    }
}

/// Show a driver and their remaining cycle hours
#[derive(Args)]
pub struct ShowDriverArgs {
    #[arg(help = "Unique identifier of the driver")]
    pub id: u64,
}

impl From<ShowDriverArgs> for Id {
    fn from(val: ShowDriverArgs) -> Self {
        Id { id: val.id }
    }
}

/// Reset a driver's remaining cycle hours
///
/// Typically run after the driver's 34-hour restart. Without `--hours` the
/// driver gets a full 70-hour cycle back.
#[derive(Args)]
pub struct ResetCycleArgs {
    #[arg(help = "Unique identifier of the driver")]
    pub id: u64,
    #[arg(long, help = "Remaining hours to set, between 0 and 70")]
    pub hours: Option<f64>,
}

impl From<ResetCycleArgs> for ResetCycle {
    fn from(val: ResetCycleArgs) -> Self {
        ResetCycle {
            driver_id: val.id,
            hours: val.hours,
        }
    }
}

#[derive(Subcommand)]
pub enum DriverCommands {
    /// Create a new driver
    #[command(alias = "c")]
    Create(CreateDriverArgs),
    /// Show driver details
    #[command(alias = "s")]
    Show(ShowDriverArgs),
    /// List all drivers
    #[command(alias = "l")]
    List,
    /// Reset a driver's cycle hours
    #[command(alias = "r")]
    Reset(ResetCycleArgs),
}

// ============================================================================
// Trip arguments
// ============================================================================

/// Plan a trip, store it and write its duty log
///
/// Distance and duration are the routed totals for the whole trip, from the
/// current location via pickup to dropoff.
#[derive(Args)]
pub struct PlanTripArgs {
    #[arg(long = "driver", help = "ID of the driver making the trip")]
    pub driver_id: u64,
    #[arg(long = "from", help = "Where the driver currently is")]
    pub current_location: String,
    #[arg(long = "pickup", help = "Where the load is picked up")]
    pub pickup_location: String,
    #[arg(long = "dropoff", help = "Where the load is delivered")]
    pub dropoff_location: String,
    #[arg(long = "distance", help = "Total route distance in miles")]
    pub distance_miles: f64,
    #[arg(long = "duration", help = "Expected driving time in hours")]
    pub duration_hours: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Hours of the 70-hour cycle already used"
    )]
    pub cycle_used: f64,
}

impl From<PlanTripArgs> for PlanTrip {
    fn from(val: PlanTripArgs) -> Self {
        PlanTrip {
            driver_id: val.driver_id,
            current_location: val.current_location,
            pickup_location: val.pickup_location,
            dropoff_location: val.dropoff_location,
            distance_miles: val.distance_miles,
            duration_hours: val.duration_hours,
            cycle_used: val.cycle_used,
        }
    }
}

/// Identifies a single trip
#[derive(Args)]
pub struct TripIdArgs {
    #[arg(help = "Unique identifier of the trip")]
    pub id: u64,
}

impl From<TripIdArgs> for Id {
    fn from(val: TripIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// List trips, newest first
#[derive(Args)]
pub struct ListTripsArgs {
    #[arg(long = "driver", help = "Only show trips for this driver")]
    pub driver_id: Option<u64>,
    #[arg(long, help = "Show completed trips instead of planned ones")]
    pub completed: bool,
}

impl From<ListTripsArgs> for ListTrips {
    fn from(val: ListTripsArgs) -> Self {
        ListTrips {
            driver_id: val.driver_id,
            completed: val.completed,
        }
    }
}

/// Delete a trip and its day records
///
/// The rendered log file is left on disk.
#[derive(Args)]
pub struct DeleteTripArgs {
    #[arg(help = "Unique identifier of the trip to delete")]
    pub id: u64,
    #[arg(long, help = "Confirm deletion")]
    pub confirm: bool,
}

impl From<DeleteTripArgs> for DeleteTrip {
    fn from(val: DeleteTripArgs) -> Self {
        DeleteTrip {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Output of `trip render`
#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Write the SVG duty log to the logs directory
    #[default]
    Svg,
    /// Print the page layout as JSON
    Json,
}

/// Re-render a trip's duty log
#[derive(Args)]
pub struct RenderTripArgs {
    #[arg(help = "Unique identifier of the trip")]
    pub id: u64,
    #[arg(long, value_enum, default_value_t = RenderFormat::Svg)]
    pub format: RenderFormat,
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Plan a new trip
    #[command(alias = "p")]
    Plan(PlanTripArgs),
    /// Show trip details
    #[command(alias = "s")]
    Show(TripIdArgs),
    /// List trips
    #[command(alias = "l")]
    List(ListTripsArgs),
    /// Mark a trip as completed
    #[command(alias = "c")]
    Complete(TripIdArgs),
    /// Delete a trip
    Delete(DeleteTripArgs),
    /// Re-render a trip's duty log
    #[command(alias = "r")]
    Render(RenderTripArgs),
}

/// Preview the duty days of a route without storing anything
#[derive(Args)]
pub struct ScheduleArgs {
    #[arg(long = "distance", help = "Total route distance in miles")]
    pub distance_miles: f64,
    #[arg(long = "duration", help = "Expected driving time in hours")]
    pub duration_hours: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Hours of the 70-hour cycle already used"
    )]
    pub cycle_used: f64,
}

impl From<ScheduleArgs> for PreviewSchedule {
    fn from(val: ScheduleArgs) -> Self {
        PreviewSchedule {
            distance_miles: val.distance_miles,
            duration_hours: val.duration_hours,
            cycle_used: val.cycle_used,
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Runs parsed commands against a planner and prints the results.
pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: TripPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_driver_command(&self, command: DriverCommands) -> Result<()> {
        match command {
            DriverCommands::Create(args) => {
                let driver = self
                    .planner
                    .create_driver(&args.into())
                    .await
                    .context("Failed to create driver")?;
                self.renderer.render(&CreateResult::new(driver).to_string())
            }
            DriverCommands::Show(args) => {
                let params: Id = args.into();
                let driver = self
                    .planner
                    .show_driver(&params)
                    .await
                    .context("Failed to fetch driver")?
                    .ok_or(WaybillError::DriverNotFound { id: params.id })?;
                self.renderer.render(&driver.to_string())
            }
            DriverCommands::List => {
                let drivers = self
                    .planner
                    .list_drivers()
                    .await
                    .context("Failed to list drivers")?;
                self.renderer.render(&Drivers(drivers).to_string())
            }
            DriverCommands::Reset(args) => {
                let params: ResetCycle = args.into();
                let driver = self
                    .planner
                    .reset_cycle(&params)
                    .await
                    .context("Failed to reset cycle")?
                    .ok_or(WaybillError::DriverNotFound {
                        id: params.driver_id,
                    })?;
                self.renderer.render(&driver.to_string())
            }
        }
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Plan(args) => {
                let params: PlanTrip = args.into();
                debug!("Planning trip: {params:?}");
                let outcome = self
                    .planner
                    .plan_trip(&params)
                    .await
                    .context("Failed to plan trip")?;
                self.renderer.render(&PlannedTrip(outcome).to_string())
            }
            TripCommands::Show(args) => {
                let params: Id = args.into();
                let trip = self
                    .planner
                    .show_trip(&params)
                    .await
                    .context("Failed to fetch trip")?
                    .ok_or(WaybillError::TripNotFound { id: params.id })?;
                self.renderer.render(&trip.to_string())
            }
            TripCommands::List(args) => self.list_trips(&args.into()).await,
            TripCommands::Complete(args) => {
                let params: Id = args.into();
                let trip = self
                    .planner
                    .complete_trip(&params)
                    .await
                    .context("Failed to complete trip")?
                    .with_context(|| format!("Trip {} not found or already completed", params.id))?;
                self.renderer.render(
                    &OperationStatus::success(format!("Completed trip {}", trip.id)).to_string(),
                )
            }
            TripCommands::Delete(args) => {
                let params: DeleteTrip = args.into();
                let trip = self
                    .planner
                    .delete_trip(&params)
                    .await
                    .context("Failed to delete trip")?
                    .ok_or(WaybillError::TripNotFound { id: params.id })?;
                self.renderer.render(&DeleteResult::new(trip).to_string())
            }
            TripCommands::Render(args) => self.render_trip(args).await,
        }
    }

    pub async fn list_trips(&self, params: &ListTrips) -> Result<()> {
        let trips = self
            .planner
            .list_trips(params)
            .await
            .context("Failed to list trips")?;
        self.renderer.render(&Trips(trips).to_string())
    }

    pub fn preview_schedule(&self, args: ScheduleArgs) -> Result<()> {
        let days = self
            .planner
            .preview_schedule(&args.into())
            .context("Failed to build schedule")?;
        self.renderer.render(&DayPlans(days).to_string())
    }

    async fn render_trip(&self, args: RenderTripArgs) -> Result<()> {
        let params = Id { id: args.id };
        match args.format {
            RenderFormat::Json => {
                let document = self
                    .planner
                    .trip_document(&params)
                    .await
                    .context("Failed to render trip")?;
                println!("{}", serde_json::to_string_pretty(&document)?);
                Ok(())
            }
            RenderFormat::Svg => {
                let trip = self
                    .planner
                    .render_trip(&params)
                    .await
                    .context("Failed to render trip")?;
                let path = trip.log_path.unwrap_or_default();
                self.renderer.render(
                    &OperationStatus::success(format!("Wrote log for trip {} to {path}", trip.id))
                        .to_string(),
                )
            }
        }
    }
}
