// ABOUTME: Re-exports command modules for barbell-cli
// ABOUTME: Shared command context holding the loaded store and output mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub mod analytics;
pub mod exercise;
pub mod profile;
pub mod workout;

use barbell::intelligence::{AnalyticsConfig, ProgressAnalytics};
use barbell::models::WeightUnit;
use barbell::store::WorkoutStore;
use chrono::{DateTime, Utc};

use crate::helpers::display::Output;

/// Everything a command needs for one invocation
pub struct CommandContext {
    pub store: WorkoutStore,
    pub output: Output,
    pub analytics: AnalyticsConfig,
    pub now: DateTime<Utc>,
}

impl CommandContext {
    /// Unit for display, falling back to pounds before a profile exists
    pub fn unit(&self) -> WeightUnit {
        self.store
            .profile()
            .map_or_else(WeightUnit::default, |profile| profile.weight_unit)
    }

    /// Analytics over the current store contents
    pub fn analytics(&self) -> ProgressAnalytics<'_> {
        ProgressAnalytics::with_config(self.store.snapshot(), self.now, self.analytics.clone())
    }
}
