use chrono::Local;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use dinegpt::builders::{build_rating_request, ReviewForm};
use dinegpt::catalog::{DAY_TYPES, SEASONS, WEATHER_IMPACTS};
use dinegpt::dispatch::{self, PREDICT_ROUTE};
use dinegpt::SelectionStore;
use shared::RatingPayload;

use crate::rpc::Client;
use crate::status::{Status, StatusLine};

fn options(values: &[&str]) -> Html {
    values
        .iter()
        .map(|value| {
            html! {
                <option value={value.to_string()}>{ *value }</option>
            }
        })
        .collect::<Html>()
}

#[function_component]
pub fn RatingPanel() -> Html {
    let store = use_state(SelectionStore::new);
    let result = use_state(|| Option::<RatingPayload>::None);
    let status = use_state(Status::default);

    let review_ref = use_node_ref();
    let helpful_ref = use_node_ref();
    let season_ref = use_node_ref();
    let day_type_ref = use_node_ref();
    let weather_ref = use_node_ref();
    let restaurant_ref = use_node_ref();

    let on_restaurant_change = {
        let store = store.clone();
        let restaurant_ref = restaurant_ref.clone();

        move |_| {
            let select = match restaurant_ref.cast::<HtmlSelectElement>() {
                Some(el) => el,
                None => return,
            };
            // Unparsable values hit the store's first-entry fallback.
            let id = select.value().parse().unwrap_or(0);
            let mut next = (*store).clone();
            next.select_restaurant(id);
            store.set(next);
        }
    };

    let onclick = {
        let store = store.clone();
        let result = result.clone();
        let status = status.clone();
        let review_ref = review_ref.clone();
        let helpful_ref = helpful_ref.clone();
        let season_ref = season_ref.clone();
        let day_type_ref = day_type_ref.clone();
        let weather_ref = weather_ref.clone();

        move |_| {
            let review = match review_ref.cast::<HtmlTextAreaElement>() {
                Some(el) => el.value(),
                None => return,
            };
            if review.trim().is_empty() {
                return;
            }

            let select_value = |node: &NodeRef| {
                node.cast::<HtmlSelectElement>()
                    .map(|el| el.value())
                    .unwrap_or_default()
            };
            let form = ReviewForm {
                helpful_count: helpful_ref
                    .cast::<HtmlInputElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                season: select_value(&season_ref),
                day_type: select_value(&day_type_ref),
                weather_impact: select_value(&weather_ref),
            };

            let request = match build_rating_request(
                store.selected_restaurant(),
                store.selected_persona(),
                &form,
                &review,
                Local::now().date_naive(),
            ) {
                Ok(request) => request,
                Err(_) => return,
            };

            status.set(Status::neutral("Scoring..."));

            let result = result.clone();
            let status = status.clone();
            spawn_local(async move {
                match dispatch::submit::<_, _, RatingPayload>(&Client, PREDICT_ROUTE, &request)
                    .await
                {
                    Ok(envelope) => {
                        result.set(Some(envelope.data));
                        status.set(Status::success(format!(
                            "Trace ID: {} · Latency: {}ms",
                            envelope.trace_id, envelope.latency_ms
                        )));
                    }
                    Err(err) => {
                        status.set(Status::error(format!("Prediction failed: {err}")));
                    }
                }
            });
        }
    };

    let persona_note = match store.selected_persona() {
        Some(persona) => format!("Persona selected: {}.", persona.name),
        None => "No persona selected; the default profile will be used.".to_string(),
    };

    let persona_cards = store
        .personas()
        .iter()
        .enumerate()
        .map(|(index, persona)| {
            let selected = store.selected_persona() == Some(persona);
            let onclick = {
                let store = store.clone();
                move |_| {
                    let mut next = (*store).clone();
                    next.select_persona(index);
                    store.set(next);
                }
            };
            html! {
                <div class={classes!("user-card", selected.then_some("selected"))} {onclick}>
                    <h4>{ &persona.name }</h4>
                    <p><strong>{ "Location: " }</strong>{ &persona.home_location }</p>
                    <p><strong>{ "Favorites: " }</strong>{ persona.favorite_cuisines.join(", ") }</p>
                    <p><strong>{ "Price: " }</strong>{ &persona.preferred_price_range }</p>
                    <p><strong>{ "Dietary: " }</strong>{ &persona.dietary_restrictions }</p>
                </div>
            }
        })
        .collect::<Html>();

    let restaurant_options = store
        .restaurants()
        .iter()
        .map(|restaurant| {
            let selected = restaurant.id == store.selected_restaurant().id;
            html! {
                <option value={restaurant.id.to_string()} selected={selected}>
                    { format!("{} - {} ({})", restaurant.name, restaurant.cuisine, restaurant.location) }
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <section class="rating-panel">
            <h2>{ "Rating Predictor" }</h2>
            <p class="persona-note">{ persona_note }</p>
            <div class="persona-cards">{ persona_cards }</div>

            <label>{ "Restaurant" }</label>
            <select ref={restaurant_ref} onchange={on_restaurant_change}>
                { restaurant_options }
            </select>

            <label>{ "Review" }</label>
            <textarea ref={review_ref} placeholder="Write the review to score" rows=4 cols=50 />

            <label>{ "Helpful votes" }</label>
            <input ref={helpful_ref} type="number" min="0" placeholder="0" />

            <label>{ "Season" }</label>
            <select ref={season_ref}>{ options(&SEASONS) }</select>

            <label>{ "Day type" }</label>
            <select ref={day_type_ref}>{ options(&DAY_TYPES) }</select>

            <label>{ "Weather impact" }</label>
            <select ref={weather_ref}>{ options(&WEATHER_IMPACTS) }</select>

            <button {onclick}>{ "Predict rating" }</button>
            <StatusLine status={(*status).clone()} />

            if let Some(payload) = result.as_ref() {
                <div class="rating-result">
                    <h4>{ "Results" }</h4>
                    <p>
                        { "Continuous rating: " }
                        <strong>{ format!("{:.2}", payload.rating_prediction) }</strong>
                    </p>
                    <p>
                        { "Rounded star: " }
                        <strong>{ format!("{:.0} / 5", payload.rounded_rating) }</strong>
                    </p>
                    if let Some(interval) = payload.confidence_interval.as_ref() {
                        <p>
                            { format!(
                                "Confidence interval: {}",
                                interval
                                    .iter()
                                    .map(|v| format!("{v:.2}"))
                                    .collect::<Vec<_>>()
                                    .join(" to ")
                            ) }
                        </p>
                    }
                    <p>
                        <strong>{ "Model: " }</strong>
                        { format!("{} ({})", payload.model_version, payload.inference_mode) }
                    </p>
                </div>
            }
        </section>
    }
}
