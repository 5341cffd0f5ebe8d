// src/main.rs

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sortiq::api::http::http_router;
use sortiq::categorizer::Categorizer;
use sortiq::config::Config;
use sortiq::llm::GeminiClient;
use sortiq::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Missing credentials are fatal here, before any request is served.
    let config = Config::from_env()?;

    info!("Starting Sortiq categorization service");

    let provider = Arc::new(GeminiClient::with_base_url(
        &config.gemini_api_key,
        &config.gemini_base_url,
    ));
    let app_state = Arc::new(AppState {
        categorizer: Categorizer::new(provider),
    });

    let app = http_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("HTTP server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
