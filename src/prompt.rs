//! Prompt construction for the completion provider
//!
//! Renders a travel request into a single natural-language prompt carrying
//! the structured-output contract: the exact field names and nesting the
//! normalizer validates downstream. The JSON-only instruction at the end is
//! defensive; the normalizer never trusts it.

use crate::models::TravelRequest;

/// Currency symbol the model is instructed to use for every monetary value
pub const CURRENCY_SYMBOL: &str = "₹";

/// Render a travel request into the generation prompt.
///
/// Deterministic and total: the same request always produces the same
/// prompt, and no request can fail to render.
#[must_use]
pub fn build(request: &TravelRequest) -> String {
    format!(
        "Create a detailed travel plan with the following information:\n\
         \n\
         Source: {source}\n\
         Destination: {destination}\n\
         Dates: {start_date} to {end_date}\n\
         Budget: {currency}{budget}\n\
         Number of travelers: {travelers}\n\
         Interests: {interests}\n\
         \n\
         Please provide:\n\
         1. Day-by-day itinerary covering every day from {start_date} to {end_date}\n\
         2. Accommodation suggestions\n\
         3. Transportation options\n\
         4. Cost breakdown\n\
         5. Activity recommendations based on the interests\n\
         \n\
         Format the response as clean structured JSON with the following fields:\n\
         - itinerary: Array of daily plans with 'day', 'date', 'title' (optional), and 'activities' array\n\
         - accommodation_suggestions: Array of places to stay with 'name', 'type', 'price_per_night', and 'description'\n\
         - transportation_options: Array of ways to travel with 'type', 'from', 'to', 'estimated_price', and 'details'\n\
         - estimated_costs: Object with 'accommodation', 'transportation', 'activities', 'food', 'miscellaneous' (optional), and 'total'\n\
         - activities: Array of recommended activities with 'name', 'category', and 'description'\n\
         \n\
         Use Indian Rupees ({currency}) for all monetary values.\n\
         Important: Respond with ONLY the JSON object. Do not include any additional notes, explanations, or markdown formatting outside the JSON.",
        source = request.source,
        destination = request.destination,
        start_date = request.start_date,
        end_date = request.end_date,
        currency = CURRENCY_SYMBOL,
        budget = request.budget,
        travelers = request.travelers,
        interests = request.interests.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goa_request() -> TravelRequest {
        TravelRequest {
            source: "Delhi".to_string(),
            destination: "Goa".to_string(),
            start_date: "2023-12-15".to_string(),
            end_date: "2023-12-20".to_string(),
            budget: 50000.0,
            travelers: 2,
            interests: vec!["beaches".to_string(), "food".to_string()],
        }
    }

    #[test]
    fn test_prompt_contains_required_field_names() {
        let prompt = build(&goa_request());
        for field in [
            "itinerary",
            "accommodation_suggestions",
            "transportation_options",
            "estimated_costs",
            "activities",
        ] {
            assert!(prompt.contains(field), "prompt is missing '{field}'");
        }
    }

    #[test]
    fn test_prompt_contains_request_details() {
        let prompt = build(&goa_request());
        assert!(prompt.contains("Source: Delhi"));
        assert!(prompt.contains("Destination: Goa"));
        assert!(prompt.contains("2023-12-15 to 2023-12-20"));
        assert!(prompt.contains("Number of travelers: 2"));
        assert!(prompt.contains("beaches, food"));
    }

    #[test]
    fn test_prompt_carries_currency_convention() {
        let prompt = build(&goa_request());
        assert!(prompt.contains(CURRENCY_SYMBOL));
        assert!(prompt.contains("₹50000"));
    }

    #[test]
    fn test_prompt_demands_bare_json() {
        let prompt = build(&goa_request());
        assert!(prompt.contains("ONLY the JSON object"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = goa_request();
        assert_eq!(build(&request), build(&request));
    }
}
