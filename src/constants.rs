// ABOUTME: Application-level constants for the Barbell crate
// ABOUTME: Service identity, storage locations, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Application constants
//!
//! Domain constants (units, physiology, limits) live in `barbell_core::constants`
//! and are re-exported here.

pub use barbell_core::constants::{analytics, limits, physiology, strength, units};

/// Service name used in structured logs
pub const SERVICE_NAME: &str = "barbell";

/// Storage file locations
pub mod storage {
    /// Directory created under the platform data directory
    pub const DATA_DIR_NAME: &str = "barbell";
    /// File name of the JSON store
    pub const STORE_FILE_NAME: &str = "store.json";
    /// Current on-disk format version
    pub const STORE_FORMAT_VERSION: u32 = 1;
}

/// Environment variable names read by the application
pub mod env_config {
    /// Override for the store file path
    pub const DATA_PATH: &str = "BARBELL_DATA_PATH";
}
