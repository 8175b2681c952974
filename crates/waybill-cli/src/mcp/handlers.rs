//! MCP tool handler implementations

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use waybill_core::{
    display::{CreateResult, DayPlans, PlannedTrip, Trips},
    params as core, TripPlanner,
};

use super::errors::to_mcp_error;

/// Transparent MCP wrapper around a core parameter type.
///
/// Core params only derive `JsonSchema` behind the `schema` feature; the
/// wrapper forwards both deserialization and schema generation so tool
/// signatures can name the core types directly.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateDriver = McpParams<core::CreateDriver>;
pub type PlanTrip = McpParams<core::PlanTrip>;
pub type ListTrips = McpParams<core::ListTrips>;
pub type PreviewSchedule = McpParams<core::PreviewSchedule>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(markdown)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<TripPlanner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<TripPlanner>) -> Self {
        Self { planner }
    }

    pub async fn plan_trip(&self, Parameters(params): Parameters<PlanTrip>) -> McpResult {
        debug!("plan_trip: {params:?}");

        let outcome = self
            .planner
            .plan_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to plan trip", &e))?;

        text(PlannedTrip(outcome).to_string())
    }

    pub async fn show_trip(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_trip: {params:?}");

        let trip = self
            .planner
            .show_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get trip", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Trip with ID {} not found", params.as_ref().id),
                    None,
                )
            })?;

        text(trip.to_string())
    }

    pub async fn list_trips(&self, Parameters(params): Parameters<ListTrips>) -> McpResult {
        debug!("list_trips: {params:?}");

        let inner = params.as_ref();
        let trips = self
            .planner
            .list_trips(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to list trips", &e))?;

        let title = if inner.completed {
            "Completed Trips"
        } else {
            "Planned Trips"
        };
        text(format!("# {title}\n\n{}", Trips(trips)))
    }

    pub async fn create_driver(&self, Parameters(params): Parameters<CreateDriver>) -> McpResult {
        debug!("create_driver: {params:?}");

        let driver = self
            .planner
            .create_driver(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create driver", &e))?;

        text(CreateResult::new(driver).to_string())
    }

    pub async fn show_driver(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_driver: {params:?}");

        let driver = self
            .planner
            .show_driver(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get driver", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Driver with ID {} not found", params.as_ref().id),
                    None,
                )
            })?;

        text(driver.to_string())
    }

    pub fn preview_schedule(&self, Parameters(params): Parameters<PreviewSchedule>) -> McpResult {
        debug!("preview_schedule: {params:?}");

        let days = self
            .planner
            .preview_schedule(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to build schedule", &e))?;

        text(DayPlans(days).to_string())
    }
}
