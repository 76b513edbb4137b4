// ABOUTME: Subcommand implementations for upcoach-cli
// ABOUTME: Shared output settings and stdout printing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

pub mod record;

use serde::Serialize;
use upcoach_models::errors::AppResult;
use upcoach_models::formatters::{format_output, format_output_pretty, OutputFormat};

/// How command results are printed
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Output {
    /// Print a value to stdout in the configured format
    pub fn print<T: Serialize>(self, data: &T) -> AppResult<()> {
        let formatted = if self.pretty {
            format_output_pretty(data, self.format)?
        } else {
            format_output(data, self.format)?
        };
        println!("{}", formatted.data);
        Ok(())
    }
}
