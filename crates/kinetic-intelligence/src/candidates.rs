// ABOUTME: Ordered fallback policy that picks the plan structurer's input
// ABOUTME: Ranked candidates first, then insertion order, then a truncated list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Candidate selection
//!
//! Stages are tried in declaration order of [`CandidateStage`] and the first
//! non-empty one wins:
//!
//! 1. `Ranked`: similarity top-K over embedded candidates
//! 2. `InsertionOrder`: the first `top_k` filtered candidates
//! 3. `Truncated`: the first `fallback_limit` filtered candidates
//!
//! If all three are empty there is nothing to schedule.

use crate::similarity::rank;
use kinetic_core::models::ExerciseDescriptor;
use serde::Serialize;
use std::fmt;

/// Which fallback stage produced the candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStage {
    /// Ranked by similarity to the query
    Ranked,
    /// Encoder unavailable or nothing embedded; corpus order
    InsertionOrder,
    /// Last resort; corpus order, shorter list
    ///
    /// Unreachable while `top_k` is at least 1, since `InsertionOrder` is then
    /// non-empty whenever the filtered set is.
    Truncated,
}

impl CandidateStage {
    /// Every stage, in the order they are tried
    pub const ORDER: [Self; 3] = [Self::Ranked, Self::InsertionOrder, Self::Truncated];

    /// Stage name for logging
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ranked => "ranked",
            Self::InsertionOrder => "insertion_order",
            Self::Truncated => "truncated",
        }
    }
}

impl fmt::Display for CandidateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected exercise, with its score when it came from the ranker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation<'a> {
    /// The exercise
    pub exercise: &'a ExerciseDescriptor,
    /// Cosine similarity to the query; `None` for unranked fallbacks
    pub similarity: Option<f32>,
}

impl<'a> Recommendation<'a> {
    const fn unranked(exercise: &'a ExerciseDescriptor) -> Self {
        Self {
            exercise,
            similarity: None,
        }
    }
}

/// Candidates chosen for scheduling
#[derive(Debug, Clone)]
pub struct CandidateSelection<'a> {
    /// Stage that produced them
    pub stage: CandidateStage,
    /// Candidates in scheduling order
    pub exercises: Vec<Recommendation<'a>>,
}

impl<'a> CandidateSelection<'a> {
    /// The selected exercises without their scores
    #[must_use]
    pub fn descriptors(&self) -> Vec<&'a ExerciseDescriptor> {
        self.exercises.iter().map(|r| r.exercise).collect()
    }
}

/// Limits for each stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidatePolicy {
    /// Ranked and insertion-order limit
    pub top_k: usize,
    /// Truncated-stage limit
    pub fallback_limit: usize,
}

impl CandidatePolicy {
    /// Run one stage
    #[must_use]
    pub fn run_stage<'a>(
        &self,
        stage: CandidateStage,
        query: &[f32],
        filtered: &[&'a ExerciseDescriptor],
    ) -> Vec<Recommendation<'a>> {
        match stage {
            CandidateStage::Ranked => rank(query, filtered, self.top_k)
                .into_iter()
                .map(|ranked| Recommendation {
                    exercise: ranked.exercise,
                    similarity: Some(ranked.similarity),
                })
                .collect(),
            CandidateStage::InsertionOrder => filtered
                .iter()
                .take(self.top_k)
                .map(|&exercise| Recommendation::unranked(exercise))
                .collect(),
            CandidateStage::Truncated => filtered
                .iter()
                .take(self.fallback_limit)
                .map(|&exercise| Recommendation::unranked(exercise))
                .collect(),
        }
    }

    /// First non-empty stage, or `None` when every stage is empty
    #[must_use]
    pub fn select<'a>(
        &self,
        query: &[f32],
        filtered: &[&'a ExerciseDescriptor],
    ) -> Option<CandidateSelection<'a>> {
        CandidateStage::ORDER.into_iter().find_map(|stage| {
            let exercises = self.run_stage(stage, query, filtered);
            (!exercises.is_empty()).then_some(CandidateSelection { stage, exercises })
        })
    }
}
