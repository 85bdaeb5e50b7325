//! Error types and handling for the `TripCraft` service

use thiserror::Error;

/// Failure while talking to the upstream completion provider.
///
/// Carries no retry state; retry policy is the caller's responsibility.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure (DNS, connect, TLS, read)
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded the configured deadline
    #[error("Completion request timed out")]
    Timeout,

    /// The provider rejected the credentials
    #[error("Completion provider rejected credentials (HTTP {status})")]
    Auth { status: u16 },

    /// The provider throttled the request
    #[error("Completion provider rate limit exceeded")]
    RateLimited,

    /// Any other non-success status from the provider
    #[error("Completion provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The provider answered 2xx but the body was not a valid completion
    #[error("Invalid response from completion provider: {detail}")]
    InvalidResponse { detail: String },

    /// The provider returned a completion with no usable text
    #[error("Completion provider returned no usable text")]
    EmptyCompletion,
}

impl From<reqwest::Error> for ProviderError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Network { source }
        }
    }
}

/// The completion text could not be turned into a valid travel plan.
///
/// Normalization is all-or-nothing: no partial plans are ever returned.
#[derive(Error, Debug)]
pub enum MalformedPlanError {
    /// The extracted candidate was not parseable JSON, or did not decode
    /// into the plan shape
    #[error("Failed to parse the generated travel plan: {detail}")]
    ParseFailure { detail: String },

    /// A required top-level key was absent from the parsed object
    #[error("Required field '{field}' is missing in the generated travel plan")]
    MissingField { field: &'static str },
}

/// Main error type for the `TripCraft` service
#[derive(Error, Debug)]
pub enum TripCraftError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The upstream completion call failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The completion could not be normalized into a plan
    #[error(transparent)]
    MalformedPlan(#[from] MalformedPlanError),
}

impl TripCraftError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Human-readable detail string surfaced at the HTTP boundary
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripCraftError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            TripCraftError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripCraftError::Provider(err) => {
                format!("Error generating travel plan: {err}")
            }
            TripCraftError::MalformedPlan(err) => err.to_string(),
        }
    }
}
