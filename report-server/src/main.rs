//! report-server — sales analytics backend for the storefront admin panel
//!
//! Long-running service that:
//! - Resolves date filters into concrete reporting windows
//! - Aggregates order, catalog, and customer data into one sales report
//! - Serves the report to the admin dashboard over HTTP

use report_server::core::{AppState, Config};
use report_server::{api, utils};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    utils::logger::init_with_file(config.log_dir.as_deref());

    tracing::info!("Starting report-server (env: {})", config.environment);

    let state = AppState::new(&config)?;
    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("report-server HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
