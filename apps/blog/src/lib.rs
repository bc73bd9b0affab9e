#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod client;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod infra;
pub mod models;
pub mod services;

// Re-exports for public API
pub use client::{DataClient, MockClient, SeaClient, TransactionClient};
pub use config::db::{db_url, DbProfile};
pub use error::{ClientError, InfraError};
pub use infra::db::connect_db;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    blog_test_support::test_logging::init();
}
