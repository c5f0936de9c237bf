//! Invoker source types for identifying where an invoker is executed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies where an invoker definition is executed.
///
/// Native invokers run in this process through a registered handler.
/// Agent invokers describe another agent that the external runtime
/// delegates to; this crate only declares them.
///
/// # Example
///
/// ```
/// use wtk::invoker::InvokerSource;
///
/// assert_eq!(InvokerSource::Native.to_string(), "native");
/// assert_eq!(InvokerSource::Agent.to_string(), "agent");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvokerSource {
	/// Tool implemented by a handler in this crate.
	#[default]
	Native,

	/// Sub-agent exposed as a tool; execution belongs to the agent runtime.
	Agent,
}

impl fmt::Display for InvokerSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Native => write!(f, "native"),
			Self::Agent => write!(f, "agent"),
		}
	}
}
