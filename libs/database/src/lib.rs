//! Database connectivity for backend services.
//!
//! Currently provides a PostgreSQL connector built on SeaORM, plus the
//! shared error and retry machinery. Connection settings load from the
//! environment when the `config` feature is enabled.

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
