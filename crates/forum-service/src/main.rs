//! Forum service entry point
//!
//! Boots the stack against the configured database and prints the current
//! thread listing as JSON.
//!
//! Run with:
//! ```bash
//! cargo run -p forum-service
//! ```

use forum_common::{
    try_init_tracing, AppConfig, AppError, AppResult, ErrorResponse, TracingConfig,
};
use forum_service::dto::ThreadSummaryResponse;
use forum_service::{init_context, GetThreadsUseCase};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, code = e.error_code(), "Forum service failed");
        match serde_json::to_string(&ErrorResponse::from(&e)) {
            Ok(body) => eprintln!("{body}"),
            Err(_) => eprintln!("forum-service: {e}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = AppConfig::from_env().map_err(|e| AppError::Config(e.to_string()))?;

    if let Err(e) = try_init_tracing(TracingConfig::from_app_config(&config)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(env = ?config.app.env, name = %config.app.name, "Configuration loaded");

    let ctx = init_context(&config).await?;
    let threads = GetThreadsUseCase::new(&ctx).execute().await?;

    let listing: Vec<ThreadSummaryResponse> =
        threads.iter().map(ThreadSummaryResponse::from).collect();
    let json = serde_json::to_string_pretty(&listing).map_err(AppError::internal)?;
    println!("{json}");

    Ok(())
}
