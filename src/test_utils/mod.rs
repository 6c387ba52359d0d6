//! Test utilities for mcpsync
//!
//! Helpers shared by unit tests and the integration suite (enabled with the
//! `test-utils` feature):
//! - [`TestEnvironment`] - a temporary project directory and home directory
//! - [`init_test_logging`] - one-time tracing setup for tests
//!
//! # Example
//!
//! ```rust,no_run
//! use mcpsync::test_utils::TestEnvironment;
//!
//! let env = TestEnvironment::new().unwrap();
//! env.write_canonical(r#"{"mcpServers":{}}"#).unwrap();
//! assert!(env.project_file_exists(".mcpsync/mcp.json"));
//! ```

pub mod environment;

pub use environment::{SAMPLE_CONFIG, TestEnvironment};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. `level` wins over `RUST_LOG`; with neither, no
/// subscriber is installed.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
