//! Structured logging setup
//!
//! Library code only emits `tracing` events. Applications embedding the
//! crate call [`init`] once (or install their own subscriber).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{BudgetError, BudgetResult};

/// Install a stdout subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (e.g. `"info"`
/// or `"budget_tracker=debug"`) is used. Fails if a global subscriber is
/// already set.
pub fn init(default_directive: &str) -> BudgetResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive).map_err(|e| {
            BudgetError::Config(format!("Invalid log filter '{}': {}", default_directive, e))
        })?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| BudgetError::Config(format!("Failed to install log subscriber: {}", e)))
}
