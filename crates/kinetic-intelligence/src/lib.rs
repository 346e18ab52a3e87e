// ABOUTME: Exercise retrieval and schedule synthesis for the Kinetic workout planner
// ABOUTME: Query synthesis, encoding, similarity ranking, filtering, and plan structuring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Kinetic Intelligence
//!
//! The planning pipeline. Given [`UserPreferences`](kinetic_core::models::UserPreferences)
//! and an [`ExerciseCorpus`], the [`PlanningEngine`]:
//!
//! 1. filters the corpus by available equipment (bodyweight always allowed)
//! 2. synthesizes a query string and encodes it with a [`TextEncoder`]
//! 3. picks candidates through the [`CandidatePolicy`] fallback chain
//! 4. partitions candidates into days with [`PlanStructurer`]
//!
//! Everything here is synchronous and CPU-bound.

/// Ordered candidate fallback chain
pub mod candidates;
/// Shared in-memory exercise corpus
pub mod corpus;
/// Text encoder trait and local encoders
pub mod encoder;
/// Planning engine
pub mod engine;
/// Equipment filter
pub mod equipment;
/// Day partitioning and load assignment
pub mod plan_structurer;
/// Query synthesis from preferences
pub mod query;
/// Cosine similarity ranking
pub mod similarity;

pub use candidates::{CandidatePolicy, CandidateSelection, CandidateStage, Recommendation};
pub use corpus::ExerciseCorpus;
pub use encoder::{FixedVectorEncoder, HashingEncoder, TextEncoder, UnavailableEncoder};
pub use engine::{PlanningEngine, Recommendations};
pub use plan_structurer::PlanStructurer;
pub use query::synthesize_query;
pub use similarity::{cosine_similarity, rank, RankedExercise};
