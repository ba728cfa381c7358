use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use place_concierge::config::Settings;
use place_concierge::core::Concierge;
use place_concierge::routes::{self, AppState};
use place_concierge::services::{CompletionClient, MapsClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn startup_error(message: String) -> std::io::Error {
    error!("{}", message);
    std::io::Error::new(std::io::ErrorKind::Other, message)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting place concierge...");

    let settings = Settings::load()
        .map_err(|e| startup_error(format!("Failed to load configuration: {}", e)))?;

    info!("Configuration loaded successfully");

    let maps = MapsClient::new(
        settings.google.base_url.clone(),
        settings.google.api_key.clone(),
        Duration::from_secs(settings.google.request_timeout_secs),
    )
    .map_err(|e| startup_error(format!("Failed to create Google Maps client: {}", e)))?;

    let completion = CompletionClient::new(
        settings.openai.base_url.clone(),
        settings.openai.api_key.clone(),
        settings.openai.model.clone(),
        settings.openai.max_tokens,
        Duration::from_secs(settings.openai.request_timeout_secs),
    )
    .map_err(|e| startup_error(format!("Failed to create completion client: {}", e)))?;

    info!(
        "Clients initialized (maps: {}, model: {})",
        settings.google.base_url, settings.openai.model
    );

    let app_state = AppState {
        concierge: Concierge::new(Arc::new(maps), Arc::new(completion), settings.search.clone()),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
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
