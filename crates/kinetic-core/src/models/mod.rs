// ABOUTME: Core data models for exercises, preferences, and workout plans
// ABOUTME: Shared by the intelligence engine, corpus providers, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data model
//!
//! - [`ExerciseDescriptor`]: immutable corpus record with its embedding
//! - [`UserPreferences`]: transient per-request input
//! - [`WorkoutPlan`]: transient per-request output

mod exercise;
mod plan;
mod preferences;

pub use exercise::{ExerciseDescriptor, FitnessLevel, LoadProfile};
pub use plan::{DayPlan, PlannedExercise, Prescription, WorkoutPlan};
pub use preferences::{UserPreferences, WorkoutType};
