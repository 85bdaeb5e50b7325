//! Data models for travel requests and generated travel plans
//!
//! The request side is strict and validated before any provider call. The
//! plan side mirrors what the generation step owns: the five top-level
//! sections are mandatory, while the entries inside each section stay loose
//! key-value records so a well-formed plan is never rejected over nested
//! shape details. The typed section structs below document the shape the
//! prompt asks the model for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TripCraftError;

/// An opaque key-value record inside a plan section
pub type PlanRecord = Map<String, Value>;

/// Structured travel request submitted by the caller.
///
/// Constructed once per API call and discarded after use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelRequest {
    /// City the trip starts from
    pub source: String,
    /// Destination city
    pub destination: String,
    /// Trip start date (ISO `YYYY-MM-DD`)
    pub start_date: String,
    /// Trip end date (ISO `YYYY-MM-DD`)
    pub end_date: String,
    /// Total trip budget in rupees
    pub budget: f64,
    /// Number of travelers
    pub travelers: u32,
    /// Traveler interests used to tailor activity recommendations
    pub interests: Vec<String>,
}

impl TravelRequest {
    /// Check the request invariants before any provider call is made.
    pub fn validate(&self) -> Result<(), TripCraftError> {
        if self.source.trim().is_empty() {
            return Err(TripCraftError::validation("Source cannot be empty"));
        }
        if self.destination.trim().is_empty() {
            return Err(TripCraftError::validation("Destination cannot be empty"));
        }
        if self.budget <= 0.0 {
            return Err(TripCraftError::validation(
                "Budget must be greater than zero",
            ));
        }
        if self.travelers < 1 {
            return Err(TripCraftError::validation(
                "At least one traveler is required",
            ));
        }

        let start = parse_iso_date(&self.start_date, "start_date")?;
        let end = parse_iso_date(&self.end_date, "end_date")?;
        if start > end {
            return Err(TripCraftError::validation(
                "Start date must not be after end date",
            ));
        }

        Ok(())
    }
}

fn parse_iso_date(value: &str, field: &str) -> Result<NaiveDate, TripCraftError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        TripCraftError::validation(format!(
            "{field} must be an ISO date (YYYY-MM-DD), got '{value}'"
        ))
    })
}

/// Structured travel plan returned to the caller.
///
/// All five sections are mandatory; absence of any is a normalization
/// failure, never a partial success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPlan {
    /// Day-by-day itinerary
    pub itinerary: Vec<PlanRecord>,
    /// Places to stay
    pub accommodation_suggestions: Vec<PlanRecord>,
    /// Ways to travel between locations
    pub transportation_options: Vec<PlanRecord>,
    /// Cost breakdown by category
    pub estimated_costs: PlanRecord,
    /// Recommended activities matching the request's interests
    pub activities: Vec<PlanRecord>,
}

/// One day of the itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// 1-based, sequential day number
    pub day: u32,
    /// Date of this day (ISO `YYYY-MM-DD`)
    pub date: String,
    /// Optional headline for the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Planned activities; shape intentionally left to the model
    pub activities: Vec<Value>,
}

/// A suggested place to stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Currency-formatted string, e.g. `"₹3500"`
    pub price_per_night: String,
    pub description: String,
}

/// A suggested way to travel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transportation {
    #[serde(rename = "type")]
    pub kind: String,
    pub from: String,
    pub to: String,
    /// Currency-formatted string, e.g. `"₹4500"`
    pub estimated_price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Estimated costs by category.
///
/// Values are currency-formatted strings as produced by the generation step;
/// totals are trusted, not recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub accommodation: String,
    pub transportation: String,
    pub activities: String,
    pub food: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miscellaneous: Option<String>,
    pub total: String,
}

/// A recommended activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub name: String,
    pub category: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

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
    fn test_valid_request_passes() {
        assert!(goa_request().validate().is_ok());
    }

    #[test]
    fn test_empty_source_rejected() {
        let mut request = goa_request();
        request.source = "   ".to_string();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("Source cannot be empty"));
    }

    #[test]
    fn test_non_positive_budget_rejected() {
        let mut request = goa_request();
        request.budget = 0.0;
        assert!(request.validate().is_err());

        request.budget = -100.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_travelers_rejected() {
        let mut request = goa_request();
        request.travelers = 0;
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("At least one traveler"));
    }

    #[test]
    fn test_inverted_date_range_rejected() {
        let mut request = goa_request();
        request.start_date = "2023-12-21".to_string();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("Start date must not be after"));
    }

    #[test]
    fn test_equal_dates_allowed() {
        let mut request = goa_request();
        request.end_date = request.start_date.clone();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut request = goa_request();
        request.start_date = "15-12-2023".to_string();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("start_date"));
    }

    #[test]
    fn test_accommodation_type_field_rename() {
        let accommodation: Accommodation = serde_json::from_value(json!({
            "name": "Beachside Resort",
            "type": "Resort",
            "price_per_night": "₹3500",
            "description": "Mid-range resort near Baga beach"
        }))
        .unwrap();
        assert_eq!(accommodation.kind, "Resort");

        let back = serde_json::to_value(&accommodation).unwrap();
        assert_eq!(back["type"], "Resort");
    }

    #[test]
    fn test_transportation_optional_details() {
        let transportation: Transportation = serde_json::from_value(json!({
            "type": "Flight",
            "from": "Delhi",
            "to": "Goa",
            "estimated_price": "₹4500"
        }))
        .unwrap();
        assert!(transportation.details.is_none());

        // a None details field stays absent on the wire
        let back = serde_json::to_value(&transportation).unwrap();
        assert!(back.get("details").is_none());
    }

    #[test]
    fn test_daily_plan_decodes_from_plan_record() {
        let record = json!({
            "day": 1,
            "date": "2023-12-15",
            "title": "Arrival and beach evening",
            "activities": [{"time": "18:00", "activity": "Sunset at Baga"}]
        });
        let daily: DailyPlan = serde_json::from_value(record).unwrap();
        assert_eq!(daily.day, 1);
        assert_eq!(daily.title.as_deref(), Some("Arrival and beach evening"));
        assert_eq!(daily.activities.len(), 1);
    }

    #[test]
    fn test_activity_item_decodes_from_plan_record() {
        let item: ActivityItem = serde_json::from_value(json!({
            "name": "Parasailing",
            "category": "beaches",
            "description": "Water sports at Baga beach"
        }))
        .unwrap();
        assert_eq!(item.category, "beaches");
    }

    #[test]
    fn test_cost_breakdown_optional_miscellaneous() {
        let costs: CostBreakdown = serde_json::from_value(json!({
            "accommodation": "₹17500",
            "transportation": "₹9000",
            "activities": "₹8000",
            "food": "₹10000",
            "total": "₹44500"
        }))
        .unwrap();
        assert!(costs.miscellaneous.is_none());
        assert_eq!(costs.total, "₹44500");
    }
}
