use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod transport;

pub use transport::{ClientTransport, DispatchError, RawResponse};

/// Uniform wrapper around every endpoint response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
    pub trace_id: String,
    pub latency_ms: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RequestMetadata {
    pub channel: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub question: String,
    pub conversation_id: Uuid,
    pub metadata: RequestMetadata,
}

/// Filters the search backend reports it applied while answering.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppliedFilters {
    pub location: Option<String>,
    pub cuisine: Option<String>,
    pub price_max: Option<u32>,
    pub amenities: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SearchPayload {
    pub answer: String,
    pub applied_filters: Option<AppliedFilters>,
}

/// Projection of a catalog restaurant sent to the rating model.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RestaurantFeatures {
    pub location: String,
    pub cuisine: String,
    pub price_bucket: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub avg_price: f64,
    pub popularity_score: f64,
    pub trend_features: BTreeMap<String, f64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserFeatures {
    pub age: u32,
    pub home_location: String,
    pub preferred_price_range: String,
    pub dietary_restrictions: String,
    pub dining_frequency: String,
    pub avg_rating_given: f64,
    pub total_reviews_written: u32,
    pub is_local_resident: bool,
    pub user_cuisine_match: u8,
    pub dietary_conflict: u8,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReviewContext {
    pub helpful_count: u32,
    pub season: String,
    pub day_type: String,
    pub weather_impact_category: String,
    pub review_month: u32,
    pub review_day_of_week: u32,
    pub is_holiday: bool,
    pub booking_lead_time_days: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RatingRequest {
    pub restaurant: RestaurantFeatures,
    pub user: UserFeatures,
    pub review_context: ReviewContext,
    pub review_text: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RatingPayload {
    pub rating_prediction: f64,
    pub rounded_rating: f64,
    pub confidence_interval: Option<Vec<f64>>,
    pub model_version: String,
    pub inference_mode: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_rating_request() -> RatingRequest {
        RatingRequest {
            restaurant: RestaurantFeatures {
                location: "Seattle".to_string(),
                cuisine: "Japanese".to_string(),
                price_bucket: "$$".to_string(),
                description: "Counter-seating sushi bar".to_string(),
                amenities: vec!["takeout".to_string(), "bar".to_string()],
                attributes: BTreeMap::from([(
                    "noise_level".to_string(),
                    "quiet".to_string(),
                )]),
                avg_price: 38.5,
                popularity_score: 0.82,
                trend_features: BTreeMap::from([
                    ("popularity_7_day_avg".to_string(), 0.8),
                    ("popularity_30_day_avg".to_string(), 0.77),
                ]),
            },
            user: UserFeatures {
                age: 29,
                home_location: "Seattle".to_string(),
                preferred_price_range: "$$".to_string(),
                dietary_restrictions: "vegetarian".to_string(),
                dining_frequency: "Weekly".to_string(),
                avg_rating_given: 4.2,
                total_reviews_written: 127,
                is_local_resident: true,
                user_cuisine_match: 1,
                dietary_conflict: 0,
            },
            review_context: ReviewContext {
                helpful_count: 3,
                season: "Summer".to_string(),
                day_type: "Weekend".to_string(),
                weather_impact_category: "Low".to_string(),
                review_month: 8,
                review_day_of_week: 6,
                is_holiday: false,
                booking_lead_time_days: 5,
            },
            review_text: "Great omakase, friendly staff.".to_string(),
        }
    }

    #[test]
    fn chat_request_survives_the_wire_format() {
        let request = ChatRequest {
            question: "best sushi near me".to_string(),
            conversation_id: Uuid::new_v4(),
            metadata: RequestMetadata {
                channel: "web-demo".to_string(),
            },
        };

        let encoded = serde_json::to_string(&request).unwrap();
        let decoded: ChatRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn rating_request_survives_the_wire_format() {
        let request = sample_rating_request();

        let encoded = serde_json::to_string(&request).unwrap();
        let decoded: RatingRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn search_envelope_decodes_from_server_json() {
        let body = json!({
            "data": {
                "answer": "Try Sakura Garden on 5th.",
                "applied_filters": {
                    "location": "Seattle",
                    "cuisine": "Japanese",
                    "price_max": null,
                    "amenities": null
                }
            },
            "trace_id": "6a1f2e4c-9b1d-4f5e-8a6f-0c9d4c1b2a3e",
            "latency_ms": 184
        })
        .to_string();

        let envelope: Envelope<SearchPayload> = serde_json::from_str(&body).unwrap();
        assert_eq!(envelope.data.answer, "Try Sakura Garden on 5th.");
        assert_eq!(envelope.latency_ms, 184);
        let filters = envelope.data.applied_filters.unwrap();
        assert_eq!(filters.cuisine.as_deref(), Some("Japanese"));
        assert_eq!(filters.price_max, None);
    }

    #[test]
    fn rating_envelope_tolerates_missing_interval() {
        let body = json!({
            "data": {
                "rating_prediction": 4.31,
                "rounded_rating": 4.0,
                "confidence_interval": null,
                "model_version": "xgb-2024-11",
                "inference_mode": "realtime"
            },
            "trace_id": "b3d2a7f0-1c4e-4a9b-9f6d-2e8c5a7b4d1f",
            "latency_ms": 52
        })
        .to_string();

        let envelope: Envelope<RatingPayload> = serde_json::from_str(&body).unwrap();
        assert_eq!(envelope.data.confidence_interval, None);
        assert_eq!(envelope.data.model_version, "xgb-2024-11");
    }
}
