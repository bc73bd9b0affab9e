//! Logging for the blog test binaries.
//!
//! Verbosity comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`. The ORM
//! and driver targets stay at `warn` unless the chosen directives name them,
//! so `TEST_LOG=debug` shows the blog's own events without every statement.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_DIRECTIVES: &str = "warn";
const QUIET_TARGETS: &[&str] = &["sqlx", "sea_orm", "sea_orm_migration"];

/// Append `target=warn` for each ORM target the directives don't mention.
pub fn effective_directives(requested: &str) -> String {
    let mut directives = requested.trim().to_string();
    for target in QUIET_TARGETS {
        let named = requested
            .split(',')
            .any(|d| d.trim().split('=').next() == Some(*target));
        if !named {
            if !directives.is_empty() {
                directives.push(',');
            }
            directives.push_str(target);
            directives.push_str("=warn");
        }
    }
    directives
}

/// Install the test subscriber once; later calls do nothing.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let (requested, source) = match std::env::var("TEST_LOG") {
            Ok(v) => (v, "TEST_LOG"),
            Err(_) => match std::env::var("RUST_LOG") {
                Ok(v) => (v, "RUST_LOG"),
                Err(_) => (DEFAULT_DIRECTIVES.to_string(), "default"),
            },
        };
        let directives = effective_directives(&requested);

        fmt()
            .with_env_filter(EnvFilter::new(&directives))
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time()
            .try_init()
            .ok(); // Another subscriber may already be installed

        tracing::debug!(source, %directives, "test logging initialized");
    });
}
