//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: one-time logging setup
//! and a handful of well-known scorecards.

pub mod logging;
pub mod scorecards;
