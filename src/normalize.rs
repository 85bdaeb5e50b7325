//! Normalization of raw completion text into a validated travel plan
//!
//! The upstream model is asked for bare JSON but does not reliably comply:
//! completions arrive fence-wrapped, prefixed with prose, or followed by
//! commentary. Normalization runs staged stripping (fence markers), then
//! greedy delimiter matching to locate the payload, then a strict decode.
//! The stages are deliberately separate; no single pattern tries to locate
//! and validate at once.

use serde_json::Value;

use crate::error::MalformedPlanError;
use crate::models::TravelPlan;

/// Top-level keys every generated plan must carry, in the order they are
/// checked and reported
pub const REQUIRED_FIELDS: [&str; 5] = [
    "itinerary",
    "accommodation_suggestions",
    "transportation_options",
    "estimated_costs",
    "activities",
];

const FENCE_OPENER: &str = "```json";
const FENCE_CLOSER: &str = "```";

/// Strip formatting artifacts and locate the JSON payload within the raw
/// completion text.
///
/// Fence handling is a prefix/suffix strip only: it covers a completion
/// wrapped in a markdown fence with nothing outside the markers. The brace
/// match is greedy (first `{` through last `}`) because the payload is one
/// top-level object with nested objects inside; a non-greedy match would
/// truncate at the first nested closing brace.
fn extract_candidate(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE_OPENER) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(FENCE_CLOSER) {
        text = rest;
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}'))
        && start < end
    {
        text = &text[start..=end];
    }

    text.trim()
}

/// Coerce a raw model completion into a validated [`TravelPlan`].
///
/// All-or-nothing: every required top-level field must be present as an
/// object key, or the whole completion is rejected. Validation is shallow;
/// nested contents are only constrained by the decode into [`TravelPlan`].
pub fn normalize(raw: &str) -> Result<TravelPlan, MalformedPlanError> {
    let candidate = extract_candidate(raw);

    let value: Value =
        serde_json::from_str(candidate).map_err(|err| MalformedPlanError::ParseFailure {
            detail: err.to_string(),
        })?;

    let Some(object) = value.as_object() else {
        return Err(MalformedPlanError::ParseFailure {
            detail: "completion is not a JSON object".to_string(),
        });
    };

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(MalformedPlanError::MissingField { field });
        }
    }

    serde_json::from_value(value).map_err(|err| MalformedPlanError::ParseFailure {
        detail: err.to_string(),
    })
}
