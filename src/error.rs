// ABOUTME: Error taxonomy for schema bootstrapping: config, connection, statement, verification
// ABOUTME: Every variant keeps the underlying cause so the failure report names the failed step

use sea_orm::DbErr;
use thiserror::Error;

use crate::migration::SchemaTable;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database connection failed: {0}")]
    Connection(#[source] DbErr),

    #[error("Creating the {table} table failed: {source}")]
    Statement {
        table: SchemaTable,
        #[source]
        source: DbErr,
    },

    #[error("Verification read on users failed: {0}")]
    Verification(#[source] DbErr),
}

impl MigrationError {
    /// The table whose statement failed, if the failure happened mid-sequence.
    pub fn failed_table(&self) -> Option<SchemaTable> {
        match self {
            MigrationError::Statement { table, .. } => Some(*table),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrationError>;
