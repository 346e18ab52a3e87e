// ABOUTME: User preferences for plan generation and the workout type enum
// ABOUTME: Validates day counts and exposes rest rules per workout type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FitnessLevel;
use crate::constants::{defaults, rest};
use crate::errors::PlanningError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of workout a plan is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Timed conditioning work
    Cardio,
    /// Resistance training
    #[default]
    Strength,
    /// Mobility and stretching
    Flexibility,
    /// Blend of the above
    Mixed,
}

impl WorkoutType {
    /// Convert to wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Flexibility => "flexibility",
            Self::Mixed => "mixed",
        }
    }

    /// Title-cased label used in plan names
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Cardio => "Cardio",
            Self::Strength => "Strength",
            Self::Flexibility => "Flexibility",
            Self::Mixed => "Mixed",
        }
    }

    /// Rest between sets for every exercise in a plan of this type
    #[must_use]
    pub const fn rest_seconds(&self) -> u32 {
        match self {
            Self::Strength => rest::STRENGTH_REST_SECONDS,
            Self::Cardio | Self::Flexibility | Self::Mixed => rest::DEFAULT_REST_SECONDS,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Muscle groups to emphasize
    #[serde(default)]
    pub focus_areas: Vec<String>,
    /// Equipment the user has access to; bodyweight is always implied
    #[serde(default)]
    pub available_equipment: Vec<String>,
    /// Workout type
    pub workout_type: WorkoutType,
    /// Declared fitness level
    pub user_level: FitnessLevel,
    /// Training days per week (1-7)
    pub days_per_week: u8,
    /// Session length in minutes (advisory, not enforced)
    pub session_duration: u32,
}

impl UserPreferences {
    /// Check invariants the planner relies on
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidPreferences` if `days_per_week` is outside 1-7
    pub fn validate(&self) -> Result<(), PlanningError> {
        let allowed = defaults::MIN_DAYS_PER_WEEK..=defaults::MAX_DAYS_PER_WEEK;
        if !allowed.contains(&self.days_per_week) {
            return Err(PlanningError::invalid(
                "days_per_week",
                format!(
                    "must be between {} and {}, got {}",
                    defaults::MIN_DAYS_PER_WEEK,
                    defaults::MAX_DAYS_PER_WEEK,
                    self.days_per_week
                ),
            ));
        }
        Ok(())
    }
}
