// ABOUTME: Logging configuration and structured logging setup for the Barbell CLI and library
// ABOUTME: Configures log levels and formatters, always writing to stderr so stdout stays parseable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Structured logging configuration

use std::env;
use std::io;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use uuid::Uuid;

use crate::constants::SERVICE_NAME;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span enter/exit events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine consumption
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for interactive CLI use
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }

    /// Raise the level to `debug` unless `RUST_LOG` already asks for more
    #[must_use]
    pub fn verbose(mut self) -> Self {
        if env::var("RUST_LOG").is_err() {
            self.level = "debug".into();
        }
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let env_filter = env::var("RUST_LOG")
            .map_or_else(
                |_| EnvFilter::new(&self.level),
                |env_directive| EnvFilter::new(&env_directive),
            )
            .add_directive(
                format!("barbell={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            );

        let registry = tracing_subscriber::registry().with(env_filter);
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let result = match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()
            }
        };
        result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a workout lifecycle transition
    pub fn log_workout_event(workout_id: Uuid, event: &str, at: DateTime<Utc>) {
        info!(
            workout.id = %workout_id,
            workout.event = %event,
            workout.at = %at,
            "Workout event"
        );
    }

    /// Log a set being recorded or removed
    pub fn log_set_event(workout_id: Uuid, exercise: &str, set_number: u32, event: &str) {
        info!(
            workout.id = %workout_id,
            set.exercise = %exercise,
            set.number = set_number,
            set.event = %event,
            "Set event"
        );
    }

    /// Log a catalog change
    pub fn log_catalog_event(exercise: &str, event: &str) {
        info!(
            catalog.exercise = %exercise,
            catalog.event = %event,
            "Catalog event"
        );
    }

    /// Log a store load or save
    pub fn log_storage_operation(operation: &str, path: &str, success: bool, duration_ms: u64) {
        info!(
            storage.operation = %operation,
            storage.path = %path,
            storage.success = success,
            storage.duration_ms = duration_ms,
            "Storage operation"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_reads_format_and_location() {
        env::remove_var("RUST_LOG");
        env::set_var("LOG_FORMAT", "json");
        env::set_var("LOG_INCLUDE_LOCATION", "1");

        let config = LoggingConfig::from_env();
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_location);
        assert_eq!(config.level, "warn");

        env::remove_var("LOG_FORMAT");
        env::remove_var("LOG_INCLUDE_LOCATION");
    }

    #[test]
    #[serial]
    fn test_verbose_respects_explicit_rust_log() {
        env::remove_var("RUST_LOG");
        assert_eq!(LoggingConfig::default().verbose().level, "debug");

        env::set_var("RUST_LOG", "trace");
        let config = LoggingConfig::from_env().verbose();
        assert_eq!(config.level, "trace");
        env::remove_var("RUST_LOG");
    }
}
