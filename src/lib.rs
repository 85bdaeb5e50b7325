//! `TripCraft` - AI-powered travel plan generation service
//!
//! This library accepts a structured travel request and produces a
//! structured travel plan by prompting an external language model and
//! normalizing its free-text completion into validated data. The
//! normalization pipeline is the core: fence stripping, greedy brace
//! matching, strict decode, and required-field enforcement.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod planner;
pub mod prompt;
pub mod provider;
pub mod web;

// Re-export core types for public API
pub use config::{LoggingConfig, ProviderConfig, ServerConfig, TripCraftConfig};
pub use error::{MalformedPlanError, ProviderError, TripCraftError};
pub use models::{
    Accommodation, ActivityItem, CostBreakdown, DailyPlan, TravelPlan, TravelRequest,
    Transportation,
};
pub use normalize::{REQUIRED_FIELDS, normalize};
pub use planner::PlannerService;
pub use provider::{CompletionProvider, GeminiClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripCraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
