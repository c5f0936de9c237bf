//! Observability utilities.
//!
//! This module provides the markdown session log used by the CLI. Library
//! code additionally emits `tracing` events around outbound requests.
//!
//! # Example
//!
//! ```no_run
//! use wtk::observability::Logger;
//! use std::collections::HashMap;
//!
//! // Create a logger
//! let logger = Logger::new(None, Some("DEBUG")).unwrap();
//!
//! // Log a session start
//! let config = HashMap::new();
//! logger.log_session_start("weather", &config).unwrap();
//!
//! // Log a tool execution
//! logger
//!     .log_tool_execution("say_hello", "{}", "Hello there!", true)
//!     .unwrap();
//!
//! // Log completion
//! logger.log_completion("Tool call finished").unwrap();
//! ```

pub mod logger;

// Re-export main types for convenience
pub use logger::Logger;
