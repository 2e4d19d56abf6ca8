// ABOUTME: Library root for the fractal schema bootstrapper
// ABOUTME: Exposes configuration, entities, the migrator, and its error type

pub mod config;
pub mod entities;
pub mod error;
pub mod migration;


pub use error::{MigrationError, Result};
pub use migration::{ensure_schema, ensure_schema_with_progress, render_schema, SchemaTable, TableStep};
