// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Fixture corpora, preference builders, engines, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `kinetic_planner`

use kinetic_planner::config::{PlannerConfig, ServerConfig};
use kinetic_planner::corpus::sample_exercises;
use kinetic_planner::intelligence::{ExerciseCorpus, HashingEncoder, PlanningEngine, TextEncoder};
use kinetic_planner::models::{ExerciseDescriptor, FitnessLevel, UserPreferences, WorkoutType};
use kinetic_planner::server::ServerResources;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A fixture exercise with no embedding
pub fn exercise(id: i64, name: &str, equipment: &str, description: &str) -> ExerciseDescriptor {
    ExerciseDescriptor {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        target_muscle: "full body".to_owned(),
        equipment: equipment.to_owned(),
        difficulty: FitnessLevel::Beginner,
        instructions: String::new(),
        embedding: Vec::new(),
    }
}

/// Preferences with no focus areas
pub fn preferences(
    workout_type: WorkoutType,
    user_level: FitnessLevel,
    days_per_week: u8,
    equipment: &[&str],
) -> UserPreferences {
    UserPreferences {
        focus_areas: Vec::new(),
        available_equipment: equipment.iter().map(|&tag| tag.to_owned()).collect(),
        workout_type,
        user_level,
        days_per_week,
        session_duration: 45,
    }
}

/// Engine over `records` using `encoder` for queries and backfill
pub fn engine_with(
    records: Vec<ExerciseDescriptor>,
    encoder: Arc<dyn TextEncoder>,
    config: PlannerConfig,
) -> PlanningEngine {
    let corpus = ExerciseCorpus::build_with_encoder(records, encoder.as_ref());
    PlanningEngine::new(Arc::new(corpus), encoder, config)
}

/// Engine over the sample catalog with the hashing encoder
pub fn sample_engine(config: PlannerConfig) -> PlanningEngine {
    init_test_logging();
    engine_with(sample_exercises(), Arc::new(HashingEncoder::new(384)), config)
}

/// Server resources around an engine with default server config
pub fn resources(engine: PlanningEngine) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(engine, ServerConfig::default()))
}
