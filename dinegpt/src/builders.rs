//! Pure derivations of the canonical request payloads from the current
//! selections and raw form fields.

use chrono::{Datelike, NaiveDate};
use miette::Diagnostic;
use thiserror::Error;
use uuid::Uuid;

use shared::{
    ChatRequest, RatingRequest, RequestMetadata, RestaurantFeatures, ReviewContext, UserFeatures,
};

use crate::catalog::{Persona, Restaurant};

/// Channel tag stamped on every chat request.
pub const CHANNEL: &str = "web-demo";

const BOOKING_LEAD_TIME_DAYS: u32 = 5;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error("review text must not be empty")]
    EmptyReviewText,
}

/// Raw rating-form values exactly as a view layer read them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewForm {
    pub helpful_count: String,
    pub season: String,
    pub day_type: String,
    pub weather_impact: String,
}

pub fn build_chat_request(
    question: &str,
    conversation_id: Uuid,
) -> Result<ChatRequest, ValidationError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }
    Ok(ChatRequest {
        question: question.to_string(),
        conversation_id,
        metadata: RequestMetadata {
            channel: CHANNEL.to_string(),
        },
    })
}

/// Direct field projection of the selected restaurant.
pub fn build_restaurant_features(restaurant: &Restaurant) -> RestaurantFeatures {
    RestaurantFeatures {
        location: restaurant.location.clone(),
        cuisine: restaurant.cuisine.clone(),
        price_bucket: restaurant.price_bucket.clone(),
        description: restaurant.description.clone(),
        amenities: restaurant.amenities.clone(),
        attributes: restaurant.attributes.clone(),
        avg_price: restaurant.avg_price,
        popularity_score: restaurant.popularity_score,
        trend_features: restaurant.trend_features.clone(),
    }
}

/// Derives the user-side model features from the selected persona, or from
/// the restaurant-anchored default profile when no persona is selected.
pub fn build_user_features(persona: Option<&Persona>, restaurant: &Restaurant) -> UserFeatures {
    let base = match persona {
        Some(persona) => persona.clone(),
        None => default_persona(restaurant),
    };

    let is_local_resident = base.home_location == restaurant.location;
    let user_cuisine_match = u8::from(
        base.favorite_cuisines
            .iter()
            .any(|cuisine| cuisine == &restaurant.cuisine),
    );

    UserFeatures {
        age: base.age,
        home_location: base.home_location,
        preferred_price_range: base.preferred_price_range,
        dietary_restrictions: base.dietary_restrictions,
        dining_frequency: base.dining_frequency,
        avg_rating_given: base.avg_rating_given,
        total_reviews_written: base.total_reviews_written,
        is_local_resident,
        user_cuisine_match,
        // Reserved field, not computed yet.
        dietary_conflict: 0,
    }
}

// Stand-in profile used when no persona card has been picked. Anchored to the
// restaurant so the rating form is usable without a selection.
fn default_persona(restaurant: &Restaurant) -> Persona {
    Persona {
        name: "Guest".to_string(),
        home_location: restaurant.location.clone(),
        favorite_cuisines: vec![restaurant.cuisine.clone()],
        preferred_price_range: restaurant.price_bucket.clone(),
        dietary_restrictions: "none".to_string(),
        dining_frequency: "Monthly".to_string(),
        avg_rating_given: 3.6,
        total_reviews_written: 42,
        age: 34,
    }
}

/// Parses the rating-form context fields. Invalid `helpful_count` input
/// becomes 0 rather than an error.
pub fn build_review_context(form: &ReviewForm, today: NaiveDate) -> ReviewContext {
    ReviewContext {
        helpful_count: form.helpful_count.trim().parse().unwrap_or(0),
        season: form.season.clone(),
        day_type: form.day_type.clone(),
        weather_impact_category: form.weather_impact.clone(),
        review_month: today.month(),
        review_day_of_week: today.weekday().num_days_from_sunday(),
        is_holiday: false,
        booking_lead_time_days: BOOKING_LEAD_TIME_DAYS,
    }
}

pub fn build_rating_request(
    restaurant: &Restaurant,
    persona: Option<&Persona>,
    form: &ReviewForm,
    review_text: &str,
    today: NaiveDate,
) -> Result<RatingRequest, ValidationError> {
    let review_text = review_text.trim();
    if review_text.is_empty() {
        return Err(ValidationError::EmptyReviewText);
    }
    Ok(RatingRequest {
        restaurant: build_restaurant_features(restaurant),
        user: build_user_features(persona, restaurant),
        review_context: build_review_context(form, today),
        review_text: review_text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn restaurant(location: &str, cuisine: &str, price_bucket: &str) -> Restaurant {
        Restaurant {
            id: 7,
            name: "Test Kitchen".to_string(),
            cuisine: cuisine.to_string(),
            location: location.to_string(),
            price_bucket: price_bucket.to_string(),
            description: String::new(),
            amenities: vec![],
            attributes: BTreeMap::new(),
            avg_price: 20.0,
            popularity_score: 0.5,
            trend_features: BTreeMap::new(),
        }
    }

    fn persona_with_favorites(favorites: &[&str]) -> Persona {
        Persona {
            name: "Sam".to_string(),
            home_location: "Denver".to_string(),
            favorite_cuisines: favorites.iter().map(|c| c.to_string()).collect(),
            preferred_price_range: "$$".to_string(),
            dietary_restrictions: "none".to_string(),
            dining_frequency: "Weekly".to_string(),
            avg_rating_given: 4.0,
            total_reviews_written: 10,
            age: 30,
        }
    }

    #[test]
    fn chat_request_trims_and_tags_the_channel() {
        let id = Uuid::new_v4();
        let request = build_chat_request("  best sushi near me  ", id).unwrap();
        assert_eq!(request.question, "best sushi near me");
        assert_eq!(request.conversation_id, id);
        assert_eq!(request.metadata.channel, "web-demo");
    }

    #[test]
    fn blank_question_is_rejected() {
        let result = build_chat_request("   ", Uuid::new_v4());
        assert_eq!(result, Err(ValidationError::EmptyQuestion));
    }

    #[test]
    fn default_user_profile_anchors_to_the_restaurant() {
        let restaurant = restaurant("X", "Italian", "$$");
        let user = build_user_features(None, &restaurant);
        assert_eq!(user.home_location, "X");
        assert!(user.is_local_resident);
        assert_eq!(user.user_cuisine_match, 1);
        assert_eq!(user.age, 34);
        assert_eq!(user.dining_frequency, "Monthly");
        assert_eq!(user.preferred_price_range, "$$");
        assert_eq!(user.dietary_conflict, 0);
    }

    #[test]
    fn mismatched_favorites_clear_the_cuisine_match() {
        let restaurant = restaurant("Rome", "Italian", "$$");
        let persona = persona_with_favorites(&["Thai"]);
        let user = build_user_features(Some(&persona), &restaurant);
        assert_eq!(user.user_cuisine_match, 0);
        assert!(!user.is_local_resident);
        assert_eq!(user.home_location, "Denver");
    }

    #[test]
    fn unparsable_helpful_count_becomes_zero() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 2).unwrap();
        for raw in ["abc", "-3", "", "4.5"] {
            let form = ReviewForm {
                helpful_count: raw.to_string(),
                ..ReviewForm::default()
            };
            assert_eq!(build_review_context(&form, today).helpful_count, 0, "{raw:?}");
        }

        let form = ReviewForm {
            helpful_count: " 12 ".to_string(),
            ..ReviewForm::default()
        };
        assert_eq!(build_review_context(&form, today).helpful_count, 12);
    }

    #[test]
    fn review_context_derives_calendar_fields() {
        // 2026-08-02 is a Sunday.
        let today = NaiveDate::from_ymd_opt(2026, 8, 2).unwrap();
        let context = build_review_context(&ReviewForm::default(), today);
        assert_eq!(context.review_month, 8);
        assert_eq!(context.review_day_of_week, 0);
        assert!(!context.is_holiday);
        assert_eq!(context.booking_lead_time_days, 5);
    }

    #[test]
    fn blank_review_text_is_rejected() {
        let restaurant = restaurant("Seattle", "Japanese", "$$");
        let today = NaiveDate::from_ymd_opt(2026, 8, 2).unwrap();
        let result =
            build_rating_request(&restaurant, None, &ReviewForm::default(), "  \n ", today);
        assert_eq!(result, Err(ValidationError::EmptyReviewText));
    }

    #[test]
    fn rating_request_composes_all_three_sections() {
        let restaurant = restaurant("Seattle", "Japanese", "$$");
        let persona = persona_with_favorites(&["Japanese"]);
        let form = ReviewForm {
            helpful_count: "3".to_string(),
            season: "Summer".to_string(),
            day_type: "Weekend".to_string(),
            weather_impact: "Low".to_string(),
        };
        let today = NaiveDate::from_ymd_opt(2026, 8, 2).unwrap();

        let request =
            build_rating_request(&restaurant, Some(&persona), &form, " Great spot. ", today)
                .unwrap();
        assert_eq!(request.review_text, "Great spot.");
        assert_eq!(request.restaurant.location, "Seattle");
        assert_eq!(request.user.user_cuisine_match, 1);
        assert_eq!(request.review_context.season, "Summer");
        assert_eq!(request.review_context.helpful_count, 3);
    }
}
