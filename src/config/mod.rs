// ABOUTME: Configuration module for the Barbell application
// ABOUTME: Environment-only settings for storage, logging, and analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration
//!
//! - **Environment**: store location plus the logging and analytics settings
//!   resolved from environment variables

/// Environment configuration
pub mod environment;

pub use environment::{default_data_path, AppConfig};
