use std::io::{self, BufRead, Write};

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use miette::{miette, Context, IntoDiagnostic, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dinegpt::builders::{build_chat_request, build_rating_request, ReviewForm};
use dinegpt::dispatch::{self, PREDICT_ROUTE, SEARCH_ROUTE};
use dinegpt::{ConversationState, SelectionStore};
use shared::{RatingPayload, SearchPayload};

mod rpc;

use rpc::HttpTransport;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Parser)]
#[command(name = "dinegpt-cli")]
#[command(about = "Terminal driver for the restaurant search and rating demo endpoints")]
struct Cli {
    /// Backend base URL; falls back to DINEGPT_API_URL, then localhost.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive chat with the restaurant-search assistant.
    Chat,
    /// One rating prediction for a catalog restaurant.
    Rate(RateArgs),
    /// Print the demo persona and restaurant catalogs.
    Catalog,
}

#[derive(Args)]
struct RateArgs {
    /// Restaurant id; unknown ids fall back to the first catalog entry.
    #[arg(long)]
    restaurant: Option<u32>,

    /// Persona name; omit to rate as the restaurant-anchored default profile.
    #[arg(long)]
    persona: Option<String>,

    /// Review text to score.
    #[arg(long)]
    review: String,

    #[arg(long, default_value = "0")]
    helpful_count: String,

    #[arg(long, default_value = "Spring")]
    season: String,

    #[arg(long, default_value = "Weekday")]
    day_type: String,

    #[arg(long, default_value = "Low")]
    weather: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let base_url = cli
        .base_url
        .or_else(|| std::env::var("DINEGPT_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    debug!(%base_url, "using backend");

    let transport = HttpTransport::new(&base_url)?;

    match cli.command {
        Command::Chat => run_chat(&transport).await,
        Command::Rate(args) => run_rate(&transport, args).await,
        Command::Catalog => {
            print_catalog(&SelectionStore::new());
            Ok(())
        }
    }
}

async fn run_chat(transport: &HttpTransport) -> Result<()> {
    let mut conversation = ConversationState::new();
    let stdin = io::stdin();

    println!("Ask about restaurants. Blank line to skip, Ctrl-D to quit.");
    prompt()?;

    for line in stdin.lock().lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }

        let request = match build_chat_request(&line, conversation.get_or_create()) {
            Ok(request) => request,
            Err(_) => {
                prompt()?;
                continue;
            }
        };

        match dispatch::submit::<_, _, SearchPayload>(transport, SEARCH_ROUTE, &request).await {
            Ok(envelope) => {
                let answer = if envelope.data.answer.is_empty() {
                    "No answer returned.".to_string()
                } else {
                    envelope.data.answer
                };
                println!("{answer}");
                if let Some(filters) = envelope.data.applied_filters {
                    println!(
                        "filters: {}",
                        serde_json::to_string(&filters).unwrap_or_default()
                    );
                }
                debug!(
                    trace_id = %envelope.trace_id,
                    latency_ms = envelope.latency_ms,
                    "search reply"
                );
            }
            Err(err) => println!("Request failed: {err}"),
        }

        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().into_diagnostic()
}

async fn run_rate(transport: &HttpTransport, args: RateArgs) -> Result<()> {
    let mut store = SelectionStore::new();
    if let Some(id) = args.restaurant {
        store.select_restaurant(id);
    }
    if let Some(name) = &args.persona {
        let index = store
            .personas()
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| miette!("no persona named {name:?} in the demo catalog"))?;
        store.select_persona(index);
    }

    let form = ReviewForm {
        helpful_count: args.helpful_count,
        season: args.season,
        day_type: args.day_type,
        weather_impact: args.weather,
    };
    let request = build_rating_request(
        store.selected_restaurant(),
        store.selected_persona(),
        &form,
        &args.review,
        Local::now().date_naive(),
    )
    .into_diagnostic()?;

    let envelope = dispatch::submit::<_, _, RatingPayload>(transport, PREDICT_ROUTE, &request)
        .await
        .into_diagnostic()
        .wrap_err("Prediction failed")?;

    let payload = envelope.data;
    println!("Rated {} as:", store.selected_restaurant().name);
    println!("  Continuous rating: {:.2}", payload.rating_prediction);
    println!("  Rounded star:      {:.0} / 5", payload.rounded_rating);
    if let Some(interval) = payload.confidence_interval {
        let bounds: Vec<String> = interval.iter().map(|v| format!("{v:.2}")).collect();
        println!("  Confidence interval: {}", bounds.join(" to "));
    }
    println!(
        "  Model: {} ({})",
        payload.model_version, payload.inference_mode
    );
    println!(
        "  Trace ID: {} · Latency: {}ms",
        envelope.trace_id, envelope.latency_ms
    );

    Ok(())
}

fn print_catalog(store: &SelectionStore) {
    println!("Personas:");
    for persona in store.personas() {
        println!(
            "  {} ({}, {}, favorites: {})",
            persona.name,
            persona.home_location,
            persona.preferred_price_range,
            persona.favorite_cuisines.join(", ")
        );
    }

    println!("Restaurants:");
    for restaurant in store.restaurants() {
        println!(
            "  [{}] {} - {} ({}, {})",
            restaurant.id,
            restaurant.name,
            restaurant.cuisine,
            restaurant.location,
            restaurant.price_bucket
        );
    }
}
