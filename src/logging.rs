//! Tracing bootstrap for applications embedding enhanced tooltips.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Level used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// `default_level`.
///
/// Idempotent. If the host already installed a global subscriber, that one
/// is kept.
pub fn init_tracing(default_level: LevelFilter) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
        if installed.is_ok() {
            tracing::debug!(%default_level, "tracing installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialisation_is_harmless() {
        init_tracing(DEFAULT_LOG_LEVEL);
        init_tracing(LevelFilter::TRACE);

        assert!(TRACING_INSTALLED.is_completed());
    }
}
