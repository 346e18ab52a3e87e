// ABOUTME: Immutable in-memory exercise corpus shared across planning requests
// ABOUTME: Optionally backfills missing embeddings with a text encoder at build time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::encoder::TextEncoder;
use kinetic_core::models::ExerciseDescriptor;
use rayon::prelude::*;

/// Exercise records in insertion order
///
/// Built once and only read afterwards, so it can be shared behind an `Arc`
/// by concurrent requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseCorpus {
    exercises: Vec<ExerciseDescriptor>,
}

impl ExerciseCorpus {
    /// Wrap records as-is
    #[must_use]
    pub const fn new(exercises: Vec<ExerciseDescriptor>) -> Self {
        Self { exercises }
    }

    /// Wrap records, encoding any that lack an embedding
    #[must_use]
    pub fn build_with_encoder(exercises: Vec<ExerciseDescriptor>, encoder: &dyn TextEncoder) -> Self {
        let missing = exercises.iter().filter(|e| !e.has_embedding()).count();
        if missing == 0 {
            return Self::new(exercises);
        }

        let exercises: Vec<ExerciseDescriptor> = exercises
            .into_par_iter()
            .map(|exercise| {
                if exercise.has_embedding() {
                    exercise
                } else {
                    let embedding = encoder.encode(&exercise.embedding_text());
                    exercise.with_embedding(embedding)
                }
            })
            .collect();

        tracing::info!(
            encoder = encoder.name(),
            backfilled = missing,
            total = exercises.len(),
            "Backfilled exercise embeddings"
        );
        Self::new(exercises)
    }

    /// All records in insertion order
    #[must_use]
    pub fn exercises(&self) -> &[ExerciseDescriptor] {
        &self.exercises
    }

    /// Unwrap into the records
    #[must_use]
    pub fn into_exercises(self) -> Vec<ExerciseDescriptor> {
        self.exercises
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the corpus has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Records carrying an embedding
    #[must_use]
    pub fn embedded_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.has_embedding()).count()
    }
}
