//! Shared logging setup for the cardsort binary.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "cardsort=warn";
const VERBOSE_LOG_FILTER: &str = "cardsort=debug";

/// Initialize tracing with stderr output.
///
/// `RUST_LOG` overrides the default filter; `--verbose` forces debug.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_filter(filter),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}
