//! Start-up composition
//!
//! Connects to PostgreSQL with the configured pool settings and wires the
//! repository adapters into a `ServiceContext`.

use forum_common::AppConfig;
use forum_db::{create_pool, DatabaseConfig};
use tracing::{info, instrument};

use crate::use_cases::{ServiceContext, ServiceError, ServiceResult};

/// Build the service context for a loaded configuration
///
/// # Errors
/// Returns `ServiceError::Internal` if the database cannot be reached
#[instrument(skip(config), fields(app = %config.app.name))]
pub async fn init_context(config: &AppConfig) -> ServiceResult<ServiceContext> {
    let db_config = DatabaseConfig::from(&config.database);

    let pool = create_pool(&db_config)
        .await
        .map_err(|e| ServiceError::internal(format!("database connection failed: {e}")))?;

    info!(env = ?config.app.env, "Service context ready");

    Ok(ServiceContext::postgres(pool))
}
