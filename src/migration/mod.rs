// ABOUTME: Schema migrator that applies the fractal tables in dependency order
// ABOUTME: Runs each idempotent CREATE TABLE, reports progress, then verifies with a users count

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use sea_orm_migration::SchemaManager;

use crate::entities::User;
use crate::error::{MigrationError, Result};

pub mod tables;

pub use tables::{render_schema, SchemaTable, TableStep};

/// Ensures all five tables exist and returns the number of users.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<u64> {
    ensure_schema_with_progress(db, |_| {}).await
}

/// Same as [`ensure_schema`], calling `on_created` after each table statement succeeds.
///
/// The first failing statement aborts the sequence; later tables are not attempted.
/// Nothing is rolled back since every statement is safe to re-run.
pub async fn ensure_schema_with_progress<F>(db: &DatabaseConnection, mut on_created: F) -> Result<u64>
where
    F: FnMut(SchemaTable),
{
    tracing::info!("🔄 Starting database migration...");
    let manager = SchemaManager::new(db);

    for step in TableStep::all() {
        manager
            .create_table(step.statement())
            .await
            .map_err(|source| MigrationError::Statement {
                table: step.table,
                source,
            })?;

        tracing::info!("✅ {} table ready", step.table);
        on_created(step.table);
    }

    tracing::info!("🎉 Database migration completed successfully!");

    let user_count = User::find()
        .count(db)
        .await
        .map_err(MigrationError::Verification)?;

    tracing::info!("📊 Current users in database: {}", user_count);
    Ok(user_count)
}
