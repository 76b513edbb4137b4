// ABOUTME: Configuration module for the UpCoach model tooling
// ABOUTME: Environment-driven settings for logging and CLI output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

/// Environment variable parsing into typed CLI settings
pub mod environment;

pub use environment::{CliConfig, EnvSource, LogFormat, LoggingConfig, ProcessEnv};
