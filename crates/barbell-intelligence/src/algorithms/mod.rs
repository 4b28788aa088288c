// ABOUTME: Strength estimation algorithms used by the analytics engine
// ABOUTME: Re-exports one-rep-max estimators and the default Brzycki helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// One-rep-max estimation formulas
pub mod one_rep_max;

pub use one_rep_max::{estimated_one_rep_max, OneRepMaxAlgorithm};
