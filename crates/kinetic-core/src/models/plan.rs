// ABOUTME: Workout plan output types: plans, day plans, and planned exercises
// ABOUTME: Encodes the reps-or-duration rule in the Prescription enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ExerciseDescriptor, FitnessLevel, WorkoutType};
use serde::{Deserialize, Serialize};

/// How much work one exercise entry prescribes per set
///
/// Serialized as the two nullable fields `reps` and `duration`, exactly one
/// of which is non-null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrescription", into = "RawPrescription")]
pub enum Prescription {
    /// Repetitions per set
    Reps(u32),
    /// Seconds per set
    Duration(u32),
}

impl Prescription {
    /// Repetitions, if this is a rep-based prescription
    #[must_use]
    pub const fn reps(&self) -> Option<u32> {
        match self {
            Self::Reps(reps) => Some(*reps),
            Self::Duration(_) => None,
        }
    }

    /// Seconds, if this is a timed prescription
    #[must_use]
    pub const fn duration(&self) -> Option<u32> {
        match self {
            Self::Duration(seconds) => Some(*seconds),
            Self::Reps(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPrescription {
    reps: Option<u32>,
    duration: Option<u32>,
}

impl From<Prescription> for RawPrescription {
    fn from(prescription: Prescription) -> Self {
        Self {
            reps: prescription.reps(),
            duration: prescription.duration(),
        }
    }
}

impl TryFrom<RawPrescription> for Prescription {
    type Error = String;

    fn try_from(raw: RawPrescription) -> Result<Self, Self::Error> {
        match (raw.reps, raw.duration) {
            (Some(reps), None) => Ok(Self::Reps(reps)),
            (None, Some(seconds)) => Ok(Self::Duration(seconds)),
            (Some(_), Some(_)) => Err("exactly one of reps or duration may be set, got both".into()),
            (None, None) => Err("exactly one of reps or duration must be set, got neither".into()),
        }
    }
}

/// One exercise scheduled on a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// Corpus identifier of the exercise
    pub id: i64,
    /// Exercise name
    pub name: String,
    /// Exercise description
    pub description: String,
    /// Primary muscle group
    pub target_muscle: String,
    /// Equipment tag
    pub equipment: String,
    /// Number of sets
    pub sets: u32,
    /// Reps or duration per set
    #[serde(flatten)]
    pub prescription: Prescription,
    /// Rest between sets in seconds
    pub rest_time: u32,
    /// 1-based position within the day
    pub order: u32,
}

impl PlannedExercise {
    /// Schedule `exercise` with the given load parameters
    #[must_use]
    pub fn new(
        exercise: &ExerciseDescriptor,
        sets: u32,
        prescription: Prescription,
        rest_time: u32,
        order: u32,
    ) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.clone(),
            description: exercise.description.clone(),
            target_muscle: exercise.target_muscle.clone(),
            equipment: exercise.equipment.clone(),
            sets,
            prescription,
            rest_time,
            order,
        }
    }
}

/// Exercises for one training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day index
    pub day: u8,
    /// Exercises in order
    pub exercises: Vec<PlannedExercise>,
}

/// A complete multi-day plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Generated plan name, e.g. "Strength Workout Plan"
    pub name: String,
    /// Generated summary
    pub description: String,
    /// Training days per week
    pub days_per_week: u8,
    /// Session length in minutes
    pub session_duration: u32,
    /// Workout type
    pub workout_type: WorkoutType,
    /// Declared level
    pub user_level: FitnessLevel,
    /// One entry per day, in day order
    pub days: Vec<DayPlan>,
}

impl WorkoutPlan {
    /// Total number of scheduled exercise entries across all days
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(|day| day.exercises.len()).sum()
    }

    /// Iterate every scheduled entry
    pub fn exercises(&self) -> impl Iterator<Item = &PlannedExercise> {
        self.days.iter().flat_map(|day| day.exercises.iter())
    }
}
