// ABOUTME: Environment configuration for store location, logging, and analytics
// ABOUTME: Resolves BARBELL_DATA_PATH with a platform data-directory fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration

use std::env;
use std::path::PathBuf;

use barbell_intelligence::config::AnalyticsConfig;
use tracing::{debug, info};

use crate::constants::env_config;
use crate::constants::storage::{DATA_DIR_NAME, STORE_FILE_NAME};
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON store location
    pub data_path: PathBuf,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Analytics settings
    pub analytics: AnalyticsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `BARBELL_DATA_PATH` is unset and the platform has no data directory
    pub fn from_env() -> AppResult<Self> {
        Self::with_data_path(None)
    }

    /// Load configuration, preferring an explicit store path over the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no path is given, `BARBELL_DATA_PATH` is unset, and
    /// the platform has no data directory
    pub fn with_data_path(explicit: Option<PathBuf>) -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let data_path = match explicit.or_else(data_path_from_env) {
            Some(path) => path,
            None => default_data_path()?,
        };
        debug!(path = %data_path.display(), "Resolved store path");

        Ok(Self {
            data_path,
            logging: LoggingConfig::from_env(),
            analytics: AnalyticsConfig::global().clone(),
        })
    }
}

fn data_path_from_env() -> Option<PathBuf> {
    env::var(env_config::DATA_PATH)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// `<platform data dir>/barbell/store.json`
///
/// # Errors
///
/// Returns a configuration error when the platform reports no data directory
pub fn default_data_path() -> AppResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME).join(STORE_FILE_NAME))
        .ok_or_else(|| {
            AppError::config(format!(
                "No platform data directory; set {} or pass --data",
                env_config::DATA_PATH
            ))
        })
}
