// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Load tables, rest intervals, equipment tags, and planner defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Tunables that operators may change
//! live in [`crate::config::PlannerConfig`]; the defaults for those are here.

/// Load parameter ranges per fitness level (inclusive bounds)
pub mod load {
    /// Beginner sets range
    pub const BEGINNER_SETS: (u32, u32) = (2, 3);
    /// Beginner reps range
    pub const BEGINNER_REPS: (u32, u32) = (8, 12);
    /// Intermediate sets range
    pub const INTERMEDIATE_SETS: (u32, u32) = (3, 4);
    /// Intermediate reps range
    pub const INTERMEDIATE_REPS: (u32, u32) = (10, 15);
    /// Advanced sets range
    pub const ADVANCED_SETS: (u32, u32) = (4, 5);
    /// Advanced reps range
    pub const ADVANCED_REPS: (u32, u32) = (12, 20);
    /// Timed-exercise duration range in seconds
    pub const CARDIO_DURATION_SECONDS: (u32, u32) = (30, 60);
}

/// Rest intervals between sets, in seconds
pub mod rest {
    /// Rest for strength plans
    pub const STRENGTH_REST_SECONDS: u32 = 60;
    /// Rest for every other workout type
    pub const DEFAULT_REST_SECONDS: u32 = 30;
}

/// Equipment tags
pub mod equipment {
    /// Tag that is always available regardless of user input
    pub const BODYWEIGHT: &str = "bodyweight";
}

/// Query synthesis
pub mod query {
    /// Literal suffix appended to every synthesized query
    pub const QUERY_SUFFIX: &str = "exercise workout";
    /// Description keyword that forces a timed prescription
    pub const CARDIO_KEYWORD: &str = "cardio";
}

/// Planner defaults
pub mod defaults {
    /// Floor on exercises per day
    pub const MIN_EXERCISES_PER_DAY: usize = 4;
    /// Number of candidates kept by the similarity ranker
    pub const RANK_TOP_K: usize = 20;
    /// Size of the last-resort truncated candidate list
    pub const FALLBACK_LIMIT: usize = 10;
    /// Smallest accepted `days_per_week`
    pub const MIN_DAYS_PER_WEEK: u8 = 1;
    /// Largest accepted `days_per_week`
    pub const MAX_DAYS_PER_WEEK: u8 = 7;
    /// Dimension of the local hashing encoder (matches all-MiniLM-L6-v2)
    pub const EMBEDDING_DIMENSION: usize = 384;
}
