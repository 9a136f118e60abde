//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use tubely_core::Config;

/// Validate critical configuration values
///
/// Fails fast on settings that would make the server insecure or unusable; merely
/// questionable settings are logged as warnings.
pub fn validate_config(config: &Config) -> Result<()> {
    let is_production = config.is_production();

    if is_production && config.cors_origins().iter().any(|o| o == "*") {
        return Err(anyhow::anyhow!(
            "CORS configured to allow all origins (*) in production. \
            Please set specific allowed origins via CORS_ORIGINS environment variable."
        ));
    }

    if config.db_max_connections() == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds() == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    if config.max_request_body_bytes() == 0 {
        return Err(anyhow::anyhow!("Max request body size cannot be 0"));
    }

    if config.jwt_secret().is_empty() {
        return Err(anyhow::anyhow!(
            "JWT secret cannot be empty - set JWT_SECRET environment variable"
        ));
    }

    if config.jwt_expiry_hours() <= 0 {
        return Err(anyhow::anyhow!("JWT_EXPIRY_HOURS must be positive"));
    }

    if is_production && config.jwt_secret().len() < 32 {
        tracing::warn!(
            "JWT secret is shorter than 32 characters - consider using a longer, more secure secret"
        );
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}
