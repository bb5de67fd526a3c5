//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "ROSTER_LOG";

/// Filter used when `ROSTER_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "roster=info";

static INIT: Once = Once::new();

/// Initialize the roster tracing/logging system.
///
/// Reads `ROSTER_LOG` for per-component log levels, e.g.
/// `ROSTER_LOG=roster_analysis::normalizer=debug,roster_analysis=info`.
/// Falls back to `roster=info`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = resolve_filter(std::env::var(LOG_ENV_VAR).ok().as_deref());

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}

/// Parse a `ROSTER_LOG` value, falling back to [`DEFAULT_FILTER`] when it is
/// unset, blank, or not valid filter syntax.
pub fn resolve_filter(raw: Option<&str>) -> EnvFilter {
    raw.filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
