// src/logging.rs
use tracing::{Level, subscriber::set_global_default};
use tracing_subscriber::EnvFilter;

/// Installs the process-wide subscriber. `RUST_LOG` directives take precedence over `level`.
pub fn init(level: Level) {
    let env_filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .finish();

    // Already set in tests.
    let _ = set_global_default(subscriber);
}
