//! # Blog Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::path::Path;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use middleware::MethodOverride;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting blog server on {}:{}", config.host, config.port);

    let state = AppState::build(&config).await.map_err(|e| {
        tracing::error!(error = %e, "Startup failed");
        std::io::Error::other(e)
    })?;

    if config.seed_example_post {
        match state.posts.seed_example().await {
            Ok(Some(post)) => tracing::info!(post_id = %post.id, "Seeded example post"),
            Ok(None) => tracing::info!("Store not empty, example post not seeded"),
            Err(e) => tracing::warn!(error = %e, "Failed to seed example post"),
        }
    }

    let static_dir = Path::new(&config.static_dir)
        .is_dir()
        .then(|| config.static_dir.clone());
    if static_dir.is_none() {
        tracing::warn!(dir = %config.static_dir, "Static directory not found; /static is not served");
    }

    // Start HTTP server; actix handles SIGINT/SIGTERM with a graceful stop.
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(MethodOverride)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
            .configure(|cfg| handlers::configure_static(cfg, static_dir.as_deref()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Blog server stopped");
    Ok(())
}
