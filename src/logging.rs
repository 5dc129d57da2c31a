// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Structured logging setup for host applications.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "fittracker=debug,info";

/// Initialize structured JSON logging.
///
/// `RUST_LOG` overrides the default filter. Returns an error if a global
/// subscriber is already installed.
pub fn init_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_only_once() {
        let _ = init_logging();
        assert!(init_logging().is_err());
    }
}
