#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::match_settings::MatchSettings;
pub use error::AppError;
pub use errors::ErrorCode;
pub use repos::{InMemoryMatchStore, MatchStore};
pub use services::{MatchFlowService, RollAccepted};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
