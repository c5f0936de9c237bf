//! Error types for weather lookups.

use super::{TransportError, WeatherProvider};
use thiserror::Error;

/// Result type for weather lookups.
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Why a weather lookup failed.
///
/// The display text is what the agent runtime receives in the tool's
/// `error_message`.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key configured; no request was attempted.
    #[error("{provider} API key is not configured.")]
    MissingApiKey {
        /// Provider that needs the key.
        provider: WeatherProvider,
    },

    /// The request failed before a response arrived.
    #[error("Network or API error: {0}")]
    Transport(#[from] TransportError),

    /// The provider answered with a non-2xx status.
    #[error("Network or API error: HTTP status {status} from {provider}")]
    HttpStatus {
        /// Provider that answered.
        provider: WeatherProvider,
        /// HTTP status code.
        status: u16,
    },

    /// The response was 2xx but the payload reports a failure.
    #[error("Could not retrieve weather for '{city}'. Error: {message}")]
    Provider {
        /// City as requested.
        city: String,
        /// Provider's own message.
        message: String,
    },

    /// Anything else, such as a body that is not JSON.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}
