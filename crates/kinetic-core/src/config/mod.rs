// ABOUTME: Planner configuration shared by the engine and the server
// ABOUTME: Tunable floors and limits for candidate selection and day partitioning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Planner tunables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Floor on exercises scheduled per day
    pub min_exercises_per_day: usize,
    /// Candidates kept by the similarity ranker
    pub rank_top_k: usize,
    /// Size of the last-resort truncated candidate list
    pub fallback_limit: usize,
    /// Fixed RNG seed; every plan is reproducible when set
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_exercises_per_day: defaults::MIN_EXERCISES_PER_DAY,
            rank_top_k: defaults::RANK_TOP_K,
            fallback_limit: defaults::FALLBACK_LIMIT,
            seed: None,
        }
    }
}

impl PlannerConfig {
    /// Use a fixed seed for every plan
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject zero-valued counts
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error naming the first zero field
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("min_exercises_per_day", self.min_exercises_per_day),
            ("rank_top_k", self.rank_top_k),
            ("fallback_limit", self.fallback_limit),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| *value == 0) {
            return Err(AppError::config_invalid(format!(
                "{name} must be at least 1"
            )));
        }
        Ok(())
    }
}
