//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use auth::{auth_router, with_session_gate};
use axum::{
    Router,
    http::{Method, Uri, header},
    routing::get,
};
use config::ServerConfig;
use kernel::error::app_error::AppError;
use platform::mail::ResendProvider;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "moneyger=info,auth=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if !config.auth.mail.is_configured() {
        tracing::warn!("RESEND_API_KEY not set, reset password emails will not be sent");
    }
    if config.auth.reset_hook_secret.is_none() {
        tracing::warn!("RESET_HOOK_SECRET not set, reset hook accepts unauthenticated calls");
    }

    let provider = ResendProvider::new(config.auth.mail.provider_base_url.clone())?;
    let gate = config.auth.gate.clone();

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router; the gate wraps every route added before it, fallback included
    let app = Router::new()
        .nest("/api/auth", auth_router(provider, config.auth))
        .fallback(not_found);
    let app = with_session_gate(app, gate)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}
