//! # Warehouse Database Crate
//!
//! This crate owns everything that talks to the Redshift cluster. It hides
//! the driver behind a small statement-execution interface so the pipeline
//! never sees `sqlx` directly.
//!
//! ## Public API
//!
//! - `connect`: Opens the single connection a run works with.
//! - `StatementExecutor`: Execute / commit / rollback / close over one connection.
//! - `PgStatementExecutor`: The `sqlx` implementation of `StatementExecutor`.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod executor;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::DbError;
pub use executor::{PgStatementExecutor, StatementExecutor};

// Re-exported so callers can name driver errors without their own dependency.
pub use sqlx;
