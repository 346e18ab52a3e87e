// ABOUTME: Exercise descriptor and fitness level types
// ABOUTME: Immutable corpus records carrying a precomputed embedding vector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::load;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fitness level, used both for a user's declared level and an exercise's difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to training
    #[default]
    Beginner,
    /// Some consistent training history
    Intermediate,
    /// Experienced, high work capacity
    Advanced,
}

/// Inclusive ranges that sets and reps are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProfile {
    /// Sets range
    pub sets: (u32, u32),
    /// Reps range
    pub reps: (u32, u32),
}

impl FitnessLevel {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            // Default to Beginner for unrecognized values
            _ => Self::Beginner,
        }
    }

    /// Sets and reps ranges for this level
    #[must_use]
    pub const fn load_profile(&self) -> LoadProfile {
        match self {
            Self::Beginner => LoadProfile {
                sets: load::BEGINNER_SETS,
                reps: load::BEGINNER_REPS,
            },
            Self::Intermediate => LoadProfile {
                sets: load::INTERMEDIATE_SETS,
                reps: load::INTERMEDIATE_REPS,
            },
            Self::Advanced => LoadProfile {
                sets: load::ADVANCED_SETS,
                reps: load::ADVANCED_REPS,
            },
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exercise in the corpus
///
/// Built once when the corpus loads and never mutated afterwards. An empty
/// `embedding` means no vector could be produced or decoded for this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDescriptor {
    /// Stable identifier
    pub id: i64,
    /// Exercise name
    pub name: String,
    /// Short description
    pub description: String,
    /// Primary muscle group
    pub target_muscle: String,
    /// Equipment tag (compared case-insensitively)
    pub equipment: String,
    /// Difficulty level
    pub difficulty: FitnessLevel,
    /// How to perform the exercise
    pub instructions: String,
    /// Precomputed embedding vector, empty when unavailable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedding: Vec<f32>,
}

impl ExerciseDescriptor {
    /// Text fed to the encoder when embedding this exercise
    #[must_use]
    pub fn embedding_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.target_muscle, self.equipment, self.description
        )
    }

    /// Whether this record carries a usable embedding
    #[must_use]
    pub fn has_embedding(&self) -> bool {
        !self.embedding.is_empty()
    }

    /// Return a copy with the given embedding
    #[must_use]
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = embedding;
        self
    }
}
