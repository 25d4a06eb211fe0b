//! Fixed demo data backing the two tools: the persona and restaurant
//! catalogs, and the option sets for the review-context selects.

use std::collections::BTreeMap;

/// A demo user profile with dining preferences, used to seed
/// rating-prediction requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    pub name: String,
    pub home_location: String,
    pub favorite_cuisines: Vec<String>,
    pub preferred_price_range: String,
    pub dietary_restrictions: String,
    pub dining_frequency: String,
    pub avg_rating_given: f64,
    pub total_reviews_written: u32,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub price_bucket: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub avg_price: f64,
    pub popularity_score: f64,
    pub trend_features: BTreeMap<String, f64>,
}

pub const SEASONS: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];
pub const DAY_TYPES: [&str; 2] = ["Weekday", "Weekend"];
pub const WEATHER_IMPACTS: [&str; 3] = ["Low", "Moderate", "High"];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn attributes(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn trend_features(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

pub fn demo_personas() -> Vec<Persona> {
    vec![
        Persona {
            name: "Maya Chen".to_string(),
            home_location: "Seattle".to_string(),
            favorite_cuisines: strings(&["Japanese", "Thai"]),
            preferred_price_range: "$$".to_string(),
            dietary_restrictions: "vegetarian".to_string(),
            dining_frequency: "Weekly".to_string(),
            avg_rating_given: 4.2,
            total_reviews_written: 127,
            age: 29,
        },
        Persona {
            name: "Andre Williams".to_string(),
            home_location: "Chicago".to_string(),
            favorite_cuisines: strings(&["Italian", "French"]),
            preferred_price_range: "$$$".to_string(),
            dietary_restrictions: "none".to_string(),
            dining_frequency: "Monthly".to_string(),
            avg_rating_given: 3.8,
            total_reviews_written: 54,
            age: 41,
        },
        Persona {
            name: "Priya Patel".to_string(),
            home_location: "Austin".to_string(),
            favorite_cuisines: strings(&["Indian", "Mexican"]),
            preferred_price_range: "$".to_string(),
            dietary_restrictions: "gluten-free".to_string(),
            dining_frequency: "Daily".to_string(),
            avg_rating_given: 3.4,
            total_reviews_written: 311,
            age: 35,
        },
    ]
}

pub fn demo_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: 1,
            name: "Sakura Garden".to_string(),
            cuisine: "Japanese".to_string(),
            location: "Seattle".to_string(),
            price_bucket: "$$".to_string(),
            description: "Counter-seating sushi bar with a rotating omakase menu.".to_string(),
            amenities: strings(&["takeout", "bar seating", "reservations"]),
            attributes: attributes(&[
                ("noise_level", "quiet"),
                ("outdoor_seating", "no"),
                ("parking", "street"),
            ]),
            avg_price: 38.5,
            popularity_score: 0.82,
            trend_features: trend_features(&[
                ("popularity_7_day_avg", 0.84),
                ("popularity_30_day_avg", 0.79),
                ("popularity_lag_1", 0.81),
                ("avg_price_7_day_avg", 39.2),
                ("popularity_7_day_growth", 0.03),
            ]),
        },
        Restaurant {
            id: 2,
            name: "Trattoria Lucca".to_string(),
            cuisine: "Italian".to_string(),
            location: "Chicago".to_string(),
            price_bucket: "$$$".to_string(),
            description: "Family-run trattoria, handmade pasta and a deep Barolo list."
                .to_string(),
            amenities: strings(&["full bar", "private dining", "reservations"]),
            attributes: attributes(&[
                ("noise_level", "moderate"),
                ("outdoor_seating", "seasonal"),
                ("parking", "valet"),
            ]),
            avg_price: 64.0,
            popularity_score: 0.74,
            trend_features: trend_features(&[
                ("popularity_7_day_avg", 0.73),
                ("popularity_30_day_avg", 0.76),
                ("popularity_lag_1", 0.72),
                ("avg_price_7_day_avg", 65.8),
                ("popularity_7_day_growth", -0.02),
            ]),
        },
        Restaurant {
            id: 3,
            name: "El Camino Verde".to_string(),
            cuisine: "Mexican".to_string(),
            location: "Austin".to_string(),
            price_bucket: "$".to_string(),
            description: "Taqueria trailer turned brick-and-mortar, all-day breakfast tacos."
                .to_string(),
            amenities: strings(&["takeout", "outdoor seating", "counter service"]),
            attributes: attributes(&[
                ("noise_level", "lively"),
                ("outdoor_seating", "yes"),
                ("parking", "lot"),
            ]),
            avg_price: 14.0,
            popularity_score: 0.91,
            trend_features: trend_features(&[
                ("popularity_7_day_avg", 0.93),
                ("popularity_30_day_avg", 0.88),
                ("popularity_lag_1", 0.9),
                ("avg_price_7_day_avg", 13.6),
                ("popularity_7_day_growth", 0.05),
            ]),
        },
        Restaurant {
            id: 4,
            name: "Bluewater Bistro".to_string(),
            cuisine: "Seafood".to_string(),
            location: "Portland".to_string(),
            price_bucket: "$$$".to_string(),
            description: "Dockside dining room, daily catch chalkboard and raw bar.".to_string(),
            amenities: strings(&["raw bar", "waterfront seating", "reservations"]),
            attributes: attributes(&[
                ("noise_level", "moderate"),
                ("outdoor_seating", "yes"),
                ("parking", "lot"),
            ]),
            avg_price: 52.5,
            popularity_score: 0.68,
            trend_features: trend_features(&[
                ("popularity_7_day_avg", 0.66),
                ("popularity_30_day_avg", 0.7),
                ("popularity_lag_1", 0.67),
                ("avg_price_7_day_avg", 51.9),
                ("popularity_7_day_growth", -0.01),
            ]),
        },
    ]
}
