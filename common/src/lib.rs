//! Shared plumbing for the bookshop data layer.
//!
//! This crate carries the pieces every member of the workspace needs:
//!
//! - YAML configuration loading with environment overrides
//! - tracing initialization
//! - test connection factories and unique-id helpers

pub mod config;

use tracing_subscriber::EnvFilter;

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{
    create_test_connection, generate_unique_id, generate_unique_slug, get_test_database_url,
};

/// Install the global tracing subscriber with the configured log level.
///
/// Safe to call more than once; later calls are no-ops, which keeps
/// parallel test binaries from fighting over the global subscriber.
pub fn init_tracing(log_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .try_init();
}
