// ABOUTME: Error handling re-exports for the Barbell application crate
// ABOUTME: Exposes the shared AppError, ErrorCode, and AppResult from barbell-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling
//!
//! The store, catalog, and persistence layers share the error type defined in
//! `barbell-core` so that every failure carries a stable [`ErrorCode`].

pub use barbell_core::errors::{AppError, AppResult, ErrorCode};
