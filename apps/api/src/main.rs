use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::trace::{self, TraceLayer};
use tracing::{Level, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_api::{router, shutdown::shutdown_signal};
use shared_config::AppConfig;
use shared_database::ClinicStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Clinic Booking API server");

    let config = AppConfig::from_env();

    // Doctors are seeded here; patients and appointments start empty and
    // live only as long as the process.
    let store = Arc::new(ClinicStore::new());

    let app = router::create_router(store).layer(
        TraceLayer::new_for_http()
            .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
            .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
    );

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let base_url = config.public_url();
    info!("Listening on {}", addr);
    info!("Doctors API:       {}/doctors", base_url);
    info!("Patients API:      {}/patients", base_url);
    info!("Appointments API:  {}/appointments", base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}
