// ABOUTME: Tracing subscriber setup for the upcoach-cli binary
// ABOUTME: EnvFilter from RUST_LOG or the configured level, formatted to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use std::io;

use tracing_subscriber::{fmt, EnvFilter};
use upcoach_core::errors::{AppError, AppResult};

use crate::config::{LogFormat, LoggingConfig};

/// Build the event filter: `RUST_LOG` directives win over the configured level
///
/// # Errors
///
/// Returns an `ErrorCode::ConfigError` error if `RUST_LOG` holds invalid directives.
pub fn build_filter(config: &LoggingConfig) -> AppResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() => {
            EnvFilter::try_new(&config.level)
                .map_err(|e| AppError::config(format!("invalid log level: {e}")))
        }
        Err(e) => Err(AppError::config(format!(
            "invalid {} directives: {e}",
            EnvFilter::DEFAULT_ENV
        ))),
    }
}

/// Install the global tracing subscriber
///
/// Output goes to stderr so stdout carries only command results.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter = build_filter(config)?;
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| AppError::internal(format!("failed to install tracing subscriber: {e}")))
}
