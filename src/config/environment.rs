// ABOUTME: Environment-based configuration for the upcoach-cli binary
// ABOUTME: Parses UPCOACH_* variables into typed logging and output settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use std::env;
use std::str::FromStr;

use upcoach_core::errors::{AppError, AppResult};
use upcoach_core::wire_tag;

use crate::formatters::OutputFormat;

/// Log level used when neither `RUST_LOG` nor `UPCOACH_LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log verbosity (`trace`, `debug`, `info`, `warn`, `error`)
pub const LOG_LEVEL_ENV: &str = "UPCOACH_LOG_LEVEL";
/// Log line format, see [`LogFormat`]
pub const LOG_FORMAT_ENV: &str = "UPCOACH_LOG_FORMAT";
/// Default output format for printed records
pub const OUTPUT_FORMAT_ENV: &str = "UPCOACH_OUTPUT_FORMAT";
/// Pretty-print JSON output
pub const PRETTY_ENV: &str = "UPCOACH_PRETTY";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

wire_tag! {
    /// Log line format
    #[derive(Default)]
    pub enum LogFormat {
        /// Multi-line human readable output
        Pretty => "pretty",
        /// Single-line human readable output
        #[default]
        Compact => "compact",
        /// One JSON object per line
        Json => "json",
    }
}

/// Source of environment values
///
/// Tests supply a map instead of mutating the process environment.
pub trait EnvSource {
    /// Fetch a variable, `None` when unset
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Base level, overridden by `RUST_LOG` directives when present
    pub level: String,
    /// Line format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_owned(),
            format: LogFormat::default(),
        }
    }
}

/// Settings for the `upcoach-cli` binary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Output format for printed records
    pub output_format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl CliConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an `ErrorCode::ConfigError` error naming the variable when a
    /// value is set but not recognized.
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_with(&ProcessEnv)
    }

    /// Load configuration from a custom environment source
    ///
    /// # Errors
    ///
    /// Same as [`CliConfig::from_env`].
    pub fn from_env_with(env: &impl EnvSource) -> AppResult<Self> {
        let level = match non_empty(env, LOG_LEVEL_ENV) {
            Some(level) => parse_log_level(&level)?,
            None => DEFAULT_LOG_LEVEL.to_owned(),
        };
        let format = parse_var(env, LOG_FORMAT_ENV)?.unwrap_or_default();
        let output_format = parse_var(env, OUTPUT_FORMAT_ENV)?.unwrap_or_default();
        let pretty = match non_empty(env, PRETTY_ENV) {
            Some(value) => parse_bool(PRETTY_ENV, &value)?,
            None => false,
        };

        Ok(Self {
            logging: LoggingConfig { level, format },
            output_format,
            pretty,
        })
    }
}

fn non_empty(env: &impl EnvSource, name: &str) -> Option<String> {
    env.var(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_var<T: FromStr>(env: &impl EnvSource, name: &str) -> AppResult<Option<T>> {
    non_empty(env, name)
        .map(|value| {
            value
                .to_lowercase()
                .parse()
                .map_err(|_| AppError::config(format!("{name} has unsupported value `{value}`")))
        })
        .transpose()
}

fn parse_log_level(value: &str) -> AppResult<String> {
    let level = value.to_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(AppError::config(format!(
            "{LOG_LEVEL_ENV} must be one of {}, got `{value}`",
            LOG_LEVELS.join(", ")
        )))
    }
}

fn parse_bool(name: &str, value: &str) -> AppResult<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!(
            "{name} must be a boolean, got `{value}`"
        ))),
    }
}
