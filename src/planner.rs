//! Travel plan generation pipeline
//!
//! Composes the prompt builder, completion provider, and response
//! normalizer into a single per-request pipeline: prompt → completion →
//! normalization. One pass, no branching back, no retry. Every request is
//! independent; concurrent requests run this pipeline in parallel without
//! shared state.

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::error::TripCraftError;
use crate::models::{TravelPlan, TravelRequest};
use crate::normalize;
use crate::prompt;
use crate::provider::CompletionProvider;

/// Per-request travel plan generation service
pub struct PlannerService {
    provider: Arc<dyn CompletionProvider>,
}

impl PlannerService {
    /// Create a new planner backed by the given completion provider
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generate a validated travel plan for the given request.
    ///
    /// The provider round-trip is the sole suspension point; prompt
    /// construction and normalization are synchronous string work.
    #[instrument(skip(self, request), fields(source = %request.source, destination = %request.destination))]
    pub async fn generate_plan(
        &self,
        request: &TravelRequest,
    ) -> Result<TravelPlan, TripCraftError> {
        request.validate()?;

        let prompt = prompt::build(request);
        let raw = self.provider.complete(&prompt).await?;

        let plan = normalize::normalize(&raw).map_err(|err| {
            // The raw completion is never returned to the caller; log it
            // here for postmortem, since there is no retry.
            error!(raw_completion = %raw, "Failed to normalize completion: {err}");
            err
        })?;

        info!(
            "Generated travel plan with {} itinerary days for {}",
            plan.itinerary.len(),
            request.destination
        );

        Ok(plan)
    }
}
