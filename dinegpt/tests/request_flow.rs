use chrono::NaiveDate;

use dinegpt::builders::{build_chat_request, build_rating_request, ReviewForm, ValidationError};
use dinegpt::{ConversationState, SelectionStore};

#[test]
fn chat_turns_share_one_conversation_id() {
    let mut conversation = ConversationState::new();
    assert_eq!(conversation.current(), None);

    let first = build_chat_request("best sushi near me", conversation.get_or_create()).unwrap();
    let second = build_chat_request("anything cheaper?", conversation.get_or_create()).unwrap();

    assert_eq!(first.conversation_id, second.conversation_id);
    assert_eq!(conversation.current(), Some(first.conversation_id));
}

#[test]
fn blank_review_never_produces_a_request() {
    let store = SelectionStore::new();
    let today = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();

    let result = build_rating_request(
        store.selected_restaurant(),
        store.selected_persona(),
        &ReviewForm::default(),
        "   ",
        today,
    );

    assert_eq!(result, Err(ValidationError::EmptyReviewText));
}

#[test]
fn selected_persona_flows_into_the_request() {
    let mut store = SelectionStore::new();
    store.select_persona(0);
    let persona = store.selected_persona().unwrap().clone();
    let today = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();

    let form = ReviewForm {
        helpful_count: "2".to_string(),
        season: "Fall".to_string(),
        day_type: "Weekday".to_string(),
        weather_impact: "Moderate".to_string(),
    };
    let request = build_rating_request(
        store.selected_restaurant(),
        store.selected_persona(),
        &form,
        "Solid weeknight pick.",
        today,
    )
    .unwrap();

    assert_eq!(request.user.home_location, persona.home_location);
    assert_eq!(request.user.age, persona.age);
    assert_eq!(
        request.restaurant.location,
        store.selected_restaurant().location
    );
}
