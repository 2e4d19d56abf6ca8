// ABOUTME: Entry point that bootstraps the fractal tournament schema
// ABOUTME: Resolves config, opens one scoped connection, runs the migrator, and closes it

use clap::Parser;
use sea_orm::Database;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fractal_schema::{config::Args, ensure_schema, render_schema, MigrationError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("fractal_schema={},sea_orm=warn", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("❌ {}", e);
        return Err(e.into());
    }

    let backend = args.backend()?;

    if args.dry_run {
        for sql in render_schema(backend) {
            println!("{};", sql);
        }
        return Ok(());
    }

    info!("🔍 Connecting to {:?} database...", backend);
    let db = match Database::connect(args.connect_options()).await {
        Ok(db) => db,
        Err(e) => {
            let e = MigrationError::Connection(e);
            error!("❌ Migration failed: {}", e);
            return Err(e.into());
        }
    };

    let outcome = ensure_schema(&db).await;

    // Released on both paths before reporting.
    if let Err(e) = db.close().await {
        warn!("Failed to close database connection: {}", e);
    }

    match outcome {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("❌ Migration failed: {}", e);
            Err(e.into())
        }
    }
}
