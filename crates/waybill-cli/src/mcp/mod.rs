//! MCP server exposing the trip planner as tools.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};
use waybill_core::TripPlanner;

pub mod errors;
pub mod handlers;

pub use handlers::{CreateDriver, Id, ListTrips, McpResult, PlanTrip, PreviewSchedule};

/// MCP server for Waybill
#[derive(Clone)]
pub struct WaybillMcpServer {
    planner: Arc<TripPlanner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaybillMcpServer {
    pub fn new(planner: TripPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "plan_trip",
        description = "Plan a truck trip under hours-of-service rules (11h driving and 14h on duty per day, 70h cycle, fuel stop every 1000 miles). Requires driver_id, the three locations, and the routed distance_miles and duration_hours; cycle_used is the part of the 70h cycle already spent. Stores the trip, charges the driver's cycle, writes the duty log and returns the day-by-day plan. Fails without storing anything if the trip does not fit into the remaining cycle."
    )]
    async fn plan_trip(&self, params: Parameters<PlanTrip>) -> McpResult {
        self.handlers().plan_trip(params).await
    }

    #[tool(
        name = "show_trip",
        description = "Show a stored trip with its status, route, log file path and every duty day (driving hours, on-duty hours, fuel stops)."
    )]
    async fn show_trip(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_trip(params).await
    }

    #[tool(
        name = "list_trips",
        description = "List trips, newest first. Use completed=false (default) for planned trips or completed=true for finished ones; pass driver_id to filter by driver."
    )]
    async fn list_trips(&self, params: Parameters<ListTrips>) -> McpResult {
        self.handlers().list_trips(params).await
    }

    #[tool(
        name = "create_driver",
        description = "Create a driver profile with a full 70-hour cycle. The name is printed on every duty log page. Returns the new driver ID for plan_trip."
    )]
    async fn create_driver(&self, params: Parameters<CreateDriver>) -> McpResult {
        self.handlers().create_driver(params).await
    }

    #[tool(
        name = "show_driver",
        description = "Show a driver profile including the cycle hours the driver has left."
    )]
    async fn show_driver(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_driver(params).await
    }

    #[tool(
        name = "preview_schedule",
        description = "Compute the duty days for a route without storing a trip or writing a log. Useful for checking whether a trip fits into the remaining cycle before planning it."
    )]
    async fn preview_schedule(&self, params: Parameters<PreviewSchedule>) -> McpResult {
        self.handlers().preview_schedule(params)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaybillMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(r#"Waybill plans truck trips under simplified hours-of-service rules and writes a visual duty log per trip.

## Rules
- At most 11 hours driving and 14 hours on duty per day, 10 hours rest between days
- 70-hour cycle; a trip is rejected up front if driving, fueling and 2 hours of start/end overhead exceed what is left
- A 30-minute fuel stop after every 1000 miles

## Workflow
1. Create a driver with `create_driver` (or look one up with `show_driver`)
2. Optionally check a route with `preview_schedule`
3. Plan the trip with `plan_trip`; the result lists each day and the log file path
4. Review stored trips with `list_trips` and `show_trip`"#.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaybillMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Waybill MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
