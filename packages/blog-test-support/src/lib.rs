//! Blog test support utilities
//!
//! This crate provides utilities shared by the blog integration tests:
//! unified logging initialization and unique test data generation.

pub mod test_logging;
pub mod unique_helpers;
