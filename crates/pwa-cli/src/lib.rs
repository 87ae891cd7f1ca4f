//! pwa library - expose modules for testing
//!
//! This library exposes the command handlers and prompt plumbing behind the
//! `pwa` binary.

pub mod commands;
pub mod common;
pub mod errors;
pub mod prompt;

pub use common::GlobalOpts;
pub use pwa_logger as logger;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber used by the library crates.
///
/// `RUST_LOG` wins; otherwise the level follows the CLI verbosity.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logger::verbosity_to_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
