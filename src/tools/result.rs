//! The structured outcome every lookup tool returns.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Outcome of a single tool call.
///
/// Serializes to the shape the agent runtime expects:
///
/// ```
/// use wtk::tools::ToolResult;
///
/// let ok = ToolResult::success("It is sunny.");
/// assert_eq!(
///     serde_json::to_string(&ok).unwrap(),
///     r#"{"status":"success","report":"It is sunny."}"#
/// );
///
/// let err = ToolResult::error("City not found.");
/// assert_eq!(
///     serde_json::to_string(&err).unwrap(),
///     r#"{"status":"error","error_message":"City not found."}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolResult {
    /// Pre-formatted sentence summarizing the lookup.
    Success {
        /// Human-readable report.
        report: String,
    },
    /// Human-readable failure description.
    Error {
        /// Human-readable error message.
        #[serde(rename = "error_message")]
        message: String,
    },
}

impl ToolResult {
    /// Create a success result.
    pub fn success(report: impl Into<String>) -> Self {
        Self::Success {
            report: report.into(),
        }
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Whether this is a success result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The report text, if successful.
    pub fn report(&self) -> Option<&str> {
        match self {
            Self::Success { report } => Some(report),
            Self::Error { .. } => None,
        }
    }

    /// The error message, if failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message } => Some(message),
        }
    }

    /// Convert into the JSON value handed back to the runtime.
    pub fn into_value(self) -> Value {
        match self {
            Self::Success { report } => serde_json::json!({
                "status": "success",
                "report": report,
            }),
            Self::Error { message } => serde_json::json!({
                "status": "error",
                "error_message": message,
            }),
        }
    }
}

impl fmt::Display for ToolResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { report } => write!(f, "{}", report),
            Self::Error { message } => write!(f, "{}", message),
        }
    }
}

impl<E: std::error::Error> From<Result<String, E>> for ToolResult {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(report) => Self::success(report),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let ok = ToolResult::success("fine");
        assert!(ok.is_success());
        assert_eq!(ok.report(), Some("fine"));
        assert_eq!(ok.error_message(), None);

        let err = ToolResult::error("broken");
        assert!(!err.is_success());
        assert_eq!(err.report(), None);
        assert_eq!(err.error_message(), Some("broken"));
    }

    #[test]
    fn test_into_value_matches_serde() {
        let ok = ToolResult::success("fine");
        assert_eq!(serde_json::to_value(&ok).unwrap(), ok.clone().into_value());
        assert_eq!(ok.into_value(), json!({"status": "success", "report": "fine"}));

        let err = ToolResult::error("broken");
        assert_eq!(serde_json::to_value(&err).unwrap(), err.clone().into_value());
    }

    #[test]
    fn test_deserialize_error_shape() {
        let parsed: ToolResult =
            serde_json::from_value(json!({"status": "error", "error_message": "nope"})).unwrap();
        assert_eq!(parsed, ToolResult::error("nope"));
    }

    #[test]
    fn test_from_result() {
        let ok: ToolResult = Ok::<_, std::fmt::Error>("done".to_string()).into();
        assert_eq!(ok, ToolResult::success("done"));

        let err: ToolResult = Err::<String, _>(std::fmt::Error).into();
        assert!(!err.is_success());
    }
}
