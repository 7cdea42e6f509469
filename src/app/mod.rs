//! Application glue module
//!
//! Configuration, logging, and the front-end loops shared by the binaries.

mod config;
pub mod repl;
pub mod script;

pub use config::{Config, ConfigError};
pub use script::{run_script, ScriptError, ScriptReport};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging to stderr, filtered by `RUST_LOG` (default `warn`)
///
/// Rendered frames go to stdout, so logs must never share it.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
