//! HTTP endpoints for travel plan generation
//!
//! Thin glue over [`PlannerService`]: one generation endpoint plus a static
//! service descriptor at the root. Pipeline errors map to a JSON body with a
//! human-readable `detail` string.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing::error;

use crate::error::TripCraftError;
use crate::models::{TravelPlan, TravelRequest};
use crate::planner::PlannerService;

pub fn router(service: Arc<PlannerService>) -> Router {
    Router::new()
        .route("/", get(service_descriptor))
        .route("/travel/generate-plan", post(generate_plan))
        .with_state(service)
}

/// Static service descriptor for the root path
async fn service_descriptor() -> Json<Value> {
    Json(json!({
        "message": "Travel Planning AI Agent API",
        "version": crate::VERSION,
        "endpoints": {
            "generate_plan": "/travel/generate-plan"
        }
    }))
}

async fn generate_plan(
    State(service): State<Arc<PlannerService>>,
    Json(request): Json<TravelRequest>,
) -> Result<Json<TravelPlan>, ApiError> {
    let plan = service.generate_plan(&request).await?;
    Ok(Json(plan))
}

/// Maps pipeline errors onto HTTP responses
struct ApiError(TripCraftError);

impl From<TripCraftError> for ApiError {
    fn from(err: TripCraftError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            TripCraftError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        let body = json!({ "detail": self.0.user_message() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MalformedPlanError, ProviderError};

    #[tokio::test]
    async fn test_service_descriptor_lists_endpoints() {
        let Json(descriptor) = service_descriptor().await;
        assert_eq!(descriptor["message"], "Travel Planning AI Agent API");
        assert_eq!(
            descriptor["endpoints"]["generate_plan"],
            "/travel/generate-plan"
        );
    }

    #[test]
    fn test_validation_errors_map_to_422() {
        let err = ApiError(TripCraftError::validation("budget must be positive"));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_pipeline_errors_map_to_500() {
        let provider = ApiError(TripCraftError::Provider(ProviderError::RateLimited));
        assert_eq!(provider.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let malformed = ApiError(TripCraftError::MalformedPlan(
            MalformedPlanError::MissingField { field: "itinerary" },
        ));
        assert_eq!(malformed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_carries_detail_body() {
        let err = ApiError(TripCraftError::MalformedPlan(
            MalformedPlanError::MissingField {
                field: "estimated_costs",
            },
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
