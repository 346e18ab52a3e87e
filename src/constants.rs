// ABOUTME: Server-level constants for environment variables, routes, and defaults
// ABOUTME: Planner tables and limits live in kinetic_core::constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use kinetic_core::constants::{defaults, equipment, load, query, rest};

/// Environment variable names
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Corpus database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Per-day exercise floor
    pub const MIN_EXERCISES_PER_DAY: &str = "KINETIC_MIN_EXERCISES_PER_DAY";
    /// Ranker top-K
    pub const RANK_TOP_K: &str = "KINETIC_RANK_TOP_K";
    /// Truncated fallback size
    pub const FALLBACK_LIMIT: &str = "KINETIC_FALLBACK_LIMIT";
    /// Fixed RNG seed
    pub const PLAN_SEED: &str = "KINETIC_PLAN_SEED";
    /// Encoder selection (`hashing` or `disabled`)
    pub const ENCODER: &str = "KINETIC_ENCODER";
    /// Hashing encoder dimension
    pub const EMBEDDING_DIMENSION: &str = "KINETIC_EMBEDDING_DIMENSION";
}

/// Server defaults
pub mod server {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
    /// Default corpus database
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/exercises.db";
}

/// Route paths
pub mod routes {
    /// Plan generation endpoint
    pub const WORKOUT_PLAN: &str = "/api/workout/plan";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
}

/// Service identification for logs
pub mod service_names {
    /// Server binary
    pub const KINETIC_SERVER: &str = "kinetic-server";
}
