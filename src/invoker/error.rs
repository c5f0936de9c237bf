//! Error types for the invoker module.

use crate::invoker::InvokerSource;
use thiserror::Error;

/// Errors that can occur while registering or invoking tools.
///
/// Tool-level failures (a city that cannot be resolved, a provider outage)
/// are not errors here: tools report those inside their `ToolResult`.
/// `InvokerError` covers the boundary itself.
///
/// # Example
///
/// ```
/// use wtk::invoker::InvokerError;
///
/// let error = InvokerError::not_found("get_tides");
/// assert!(error.to_string().contains("get_tides"));
/// ```
#[derive(Debug, Error)]
pub enum InvokerError {
	/// The requested invoker was not found in the registry.
	#[error("invoker not found: {name}")]
	NotFound {
		/// Name of the invoker that was not found.
		name: String,
	},

	/// An invoker with the same name is already registered.
	#[error("invoker already registered: {name}")]
	DuplicateName {
		/// Name of the duplicate invoker.
		name: String,
	},

	/// The arguments provided to the invoker were invalid.
	#[error("invalid arguments for {name}: {message}")]
	InvalidArguments {
		/// Name of the invoker with invalid arguments.
		name: String,
		/// Description of the validation failure.
		message: String,
	},

	/// The invoker exists but cannot be executed from this process.
	#[error("source unavailable for {name}: {source_kind} invokers are executed by the agent runtime")]
	SourceUnavailable {
		/// Name of the invoker.
		name: String,
		/// Where the invoker is executed.
		source_kind: InvokerSource,
	},

	/// A serialization or deserialization error occurred.
	#[error("serialization error: {message}")]
	SerializationError {
		/// Description of the serialization error.
		message: String,
	},
}

impl InvokerError {
	/// Create a NotFound error for the given invoker name.
	pub fn not_found(name: impl Into<String>) -> Self {
		Self::NotFound { name: name.into() }
	}

	/// Create a DuplicateName error for the given invoker name.
	pub fn duplicate_name(name: impl Into<String>) -> Self {
		Self::DuplicateName { name: name.into() }
	}

	/// Create an InvalidArguments error.
	pub fn invalid_arguments(name: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidArguments {
			name: name.into(),
			message: message.into(),
		}
	}

	/// Create a SourceUnavailable error.
	pub fn source_unavailable(name: impl Into<String>, source_kind: InvokerSource) -> Self {
		Self::SourceUnavailable {
			name: name.into(),
			source_kind,
		}
	}

	/// Create a SerializationError.
	pub fn serialization_error(message: impl Into<String>) -> Self {
		Self::SerializationError {
			message: message.into(),
		}
	}
}

impl From<serde_json::Error> for InvokerError {
	fn from(err: serde_json::Error) -> Self {
		Self::serialization_error(err.to_string())
	}
}
