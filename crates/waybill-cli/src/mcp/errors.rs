//! Error mapping for the MCP server.

use rmcp::ErrorData;
use waybill_core::WaybillError;

/// Converts a core error into an MCP error.
///
/// Rejections (capacity, invalid route or input) are the caller's fault and
/// map to `invalid_params`; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &WaybillError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_rejection() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_maps_to_invalid_params() {
        let error = WaybillError::CapacityExceeded {
            required: 7.0,
            remaining: 2.0,
        };
        let mapped = to_mcp_error("Failed to plan trip", &error);
        assert_eq!(mapped.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(mapped.message.contains("Failed to plan trip"));
    }

    #[test]
    fn test_fault_maps_to_internal_error() {
        let error = WaybillError::internal("loop did not terminate");
        let mapped = to_mcp_error("Failed to plan trip", &error);
        assert_eq!(mapped.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
    }
}
