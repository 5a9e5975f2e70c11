use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use datemate_api::config::Settings;
use datemate_api::core::Matcher;
use datemate_api::errors::{handle_json_payload_error, handle_query_payload_error};
use datemate_api::models::ScoringWeights;
use datemate_api::rate_limit::RateLimiter;
use datemate_api::routes::{self, AppState};
use datemate_api::services::{GroqClient, InMemoryProfileStore, InMemorySessionStore};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Date Mate API...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize Groq client
    let groq = Arc::new(GroqClient::new(
        settings.groq.base_url.clone(),
        settings.groq.api_key.clone(),
        settings.groq.model.clone(),
        settings.groq.temperature,
        settings.groq.max_tokens,
        settings.groq.timeout_secs,
    ));

    info!(
        "Groq client initialized (model: {}, timeout: {}s)",
        settings.groq.model, settings.groq.timeout_secs
    );

    // Initialize matcher with configured weights
    let weights = ScoringWeights {
        hobbies: settings.scoring.weights.hobbies,
        relationship_goals: settings.scoring.weights.relationship_goals,
        values: settings.scoring.weights.values,
        languages: settings.scoring.weights.languages,
        affinity: settings.scoring.weights.affinity,
    };

    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", weights);

    // Rate limiter: fixed window per client address
    let limiter = Arc::new(RateLimiter::new(
        settings.rate_limit.max_requests,
        settings.rate_limit.window_secs,
    ));

    info!(
        "Rate limiter initialized ({} requests / {}s window)",
        settings.rate_limit.max_requests, settings.rate_limit.window_secs
    );

    // Build application state with in-memory stores
    let app_state = AppState {
        profiles: Arc::new(InMemoryProfileStore::new()),
        sessions: Arc::new(InMemorySessionStore::new()),
        groq,
        matcher,
        limiter,
        security: settings.security.clone(),
        matching: settings.matching.clone(),
        environment: settings.app.environment.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
