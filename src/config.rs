//! Configuration for fractal-schema
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use sea_orm::{ConnectOptions, DbBackend};
use std::time::Duration;

use crate::error::{MigrationError, Result};

/// Creates the fractal tournament tables if they are missing
#[derive(Parser, Debug, Clone)]
#[command(name = "fractal-schema")]
#[command(about = "Bootstraps the fractal tournament database schema")]
pub struct Args {
    /// Database URL (postgres://, postgresql:// or sqlite:)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Seconds to wait while acquiring the connection
    #[arg(long, env = "DATABASE_CONNECT_TIMEOUT_SECS", default_value = "30")]
    pub connect_timeout_secs: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Print the schema statements for the URL's backend and exit without connecting
    #[arg(long, default_value = "false")]
    pub dry_run: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(MigrationError::Config("DATABASE_URL must not be empty".to_string()));
        }

        self.backend()?;

        if self.connect_timeout_secs == 0 {
            return Err(MigrationError::Config(
                "DATABASE_CONNECT_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn backend(&self) -> Result<DbBackend> {
        backend_for_url(&self.database_url)
    }

    /// Options for the single scoped connection the migration runs on.
    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.database_url.clone());
        options
            .max_connections(1)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .sqlx_logging(false);
        options
    }
}

/// Picks the backend from the URL scheme.
pub fn backend_for_url(url: &str) -> Result<DbBackend> {
    let scheme = url.split(':').next().unwrap_or_default().to_ascii_lowercase();
    match scheme.as_str() {
        "postgres" | "postgresql" => Ok(DbBackend::Postgres),
        "sqlite" => Ok(DbBackend::Sqlite),
        _ => Err(MigrationError::Config(format!(
            "unsupported database scheme '{}', expected postgres or sqlite",
            scheme
        ))),
    }
}
