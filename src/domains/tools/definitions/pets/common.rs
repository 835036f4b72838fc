//! Common utilities shared across the pet tools.
//!
//! Result builders turn [`PetService`](crate::domains::petstore::PetService)
//! outcomes into `CallToolResult`s so that every tool reports failures the
//! same way.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::{error, warn};

use crate::domains::petstore::PetstoreError;

/// Create a success result carrying `data` as structured content.
///
/// The text content repeats the data as JSON for clients that ignore
/// structured content.
pub fn structured_result<T: Serialize>(summary: String, data: &T) -> CallToolResult {
    let value = match serde_json::to_value(data) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to serialize tool result: {}", e);
            return CallToolResult::error(vec![Content::text(format!(
                "Failed to encode result: {}",
                e
            ))]);
        }
    };

    let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());

    CallToolResult {
        content: vec![Content::text(format!("{}\n\n{}", summary, pretty))],
        structured_content: Some(value),
        is_error: Some(false),
        meta: None,
    }
}

/// Create an error result describing a failed Petstore operation.
///
/// The message starts with the error kind in brackets so callers can tell
/// bad input, authentication failures and data service failures apart.
pub fn error_result(err: &PetstoreError) -> CallToolResult {
    let headline = match err {
        PetstoreError::InvalidToolInput(_) => "Bad input",
        e if e.is_auth() => "Could not authenticate against the Petstore",
        _ => "Petstore data service rejected the request or is unreachable",
    };
    let message = format!("[{}] {}: {}", err.kind(), headline, err);
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Deserialize HTTP tool arguments into a parameter struct.
#[cfg(feature = "http")]
pub fn parse_http_arguments<T: serde::de::DeserializeOwned>(
    arguments: serde_json::Value,
) -> Result<T, String> {
    serde_json::from_value(arguments)
        .map_err(|e| crate::domains::tools::ToolError::invalid_arguments(e.to_string()).to_string())
}

/// Serialize the full CallToolResult, including structuredContent.
#[cfg(feature = "http")]
pub fn http_response(result: &CallToolResult) -> Result<serde_json::Value, String> {
    serde_json::to_value(result).map_err(|e| e.to_string())
}

#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_result_success() {
        let result = structured_result(
            "Found 1".to_string(),
            &serde_json::json!({"total_count": 1}),
        );
        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({"total_count": 1}))
        );
        assert!(result_text(&result).starts_with("Found 1"));
        assert!(result_text(&result).contains("\"total_count\": 1"));
    }

    #[test]
    fn test_error_result_distinguishes_kinds() {
        let input = error_result(&PetstoreError::invalid_input("age must not be negative"));
        let auth = error_result(&PetstoreError::auth_rejected("login returned HTTP 401"));
        let data = error_result(&PetstoreError::data_service("list pets returned HTTP 500"));

        for result in [&input, &auth, &data] {
            assert_eq!(result.is_error, Some(true));
            assert!(result.structured_content.is_none());
        }
        assert!(result_text(&input).starts_with("[invalid_tool_input] Bad input"));
        assert!(result_text(&auth).starts_with("[auth_rejected] Could not authenticate"));
        assert!(result_text(&data).starts_with("[data_service_error]"));
        assert!(result_text(&data).contains("500"));
    }
}
