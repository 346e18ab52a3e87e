// ABOUTME: Built-in sample exercise catalog and a static corpus provider over it
// ABOUTME: Used for seeding the database and for offline CLI planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CorpusProvider;
use async_trait::async_trait;
use kinetic_core::errors::AppResult;
use kinetic_core::models::{ExerciseDescriptor, FitnessLevel};

struct ExerciseData {
    name: &'static str,
    description: &'static str,
    target_muscle: &'static str,
    equipment: &'static str,
    difficulty: FitnessLevel,
    instructions: &'static str,
}

const SAMPLE_EXERCISES: &[ExerciseData] = &[
    ExerciseData {
        name: "Push-ups",
        description: "Classic bodyweight exercise targeting chest, shoulders, and triceps",
        target_muscle: "chest",
        equipment: "bodyweight",
        difficulty: FitnessLevel::Beginner,
        instructions: "Start in plank position, lower body until chest nearly touches ground, push back up",
    },
    ExerciseData {
        name: "Squats",
        description: "Fundamental lower body exercise targeting quads, glutes, and hamstrings",
        target_muscle: "legs",
        equipment: "bodyweight",
        difficulty: FitnessLevel::Beginner,
        instructions: "Stand with feet shoulder-width apart, lower hips back and down, return to standing",
    },
    ExerciseData {
        name: "Dumbbell Bench Press",
        description: "Chest exercise using dumbbells for upper body strength",
        target_muscle: "chest",
        equipment: "dumbbells",
        difficulty: FitnessLevel::Intermediate,
        instructions: "Lie on bench, press dumbbells up from chest level, lower with control",
    },
    ExerciseData {
        name: "Deadlifts",
        description: "Compound movement targeting posterior chain muscles",
        target_muscle: "back",
        equipment: "barbell",
        difficulty: FitnessLevel::Intermediate,
        instructions: "Stand with feet hip-width apart, hinge at hips, lower bar to ground, return to standing",
    },
    ExerciseData {
        name: "Plank",
        description: "Core stabilization exercise",
        target_muscle: "core",
        equipment: "bodyweight",
        difficulty: FitnessLevel::Beginner,
        instructions: "Hold rigid position on forearms and toes, maintain straight line from head to heels",
    },
    ExerciseData {
        name: "Dumbbell Rows",
        description: "Back exercise using dumbbells",
        target_muscle: "back",
        equipment: "dumbbells",
        difficulty: FitnessLevel::Beginner,
        instructions: "Bend over, pull dumbbells to sides of torso, lower with control",
    },
    ExerciseData {
        name: "Lunges",
        description: "Unilateral leg exercise",
        target_muscle: "legs",
        equipment: "bodyweight",
        difficulty: FitnessLevel::Beginner,
        instructions: "Step forward into lunge position, lower back knee toward ground, return to standing",
    },
    ExerciseData {
        name: "Burpees",
        description: "Full-body cardio exercise",
        target_muscle: "full body",
        equipment: "bodyweight",
        difficulty: FitnessLevel::Intermediate,
        instructions: "Squat down, jump back to plank, do push-up, jump feet to hands, jump up",
    },
    ExerciseData {
        name: "Dumbbell Shoulder Press",
        description: "Overhead pressing movement for shoulders",
        target_muscle: "shoulders",
        equipment: "dumbbells",
        difficulty: FitnessLevel::Beginner,
        instructions: "Press dumbbells overhead from shoulder level, lower with control",
    },
    ExerciseData {
        name: "Mountain Climbers",
        description: "Dynamic cardio and core exercise",
        target_muscle: "core",
        equipment: "bodyweight",
        difficulty: FitnessLevel::Intermediate,
        instructions: "Start in plank, alternate bringing knees to chest quickly",
    },
];

/// The built-in catalog, ids 1 through 10, without embeddings
#[must_use]
pub fn sample_exercises() -> Vec<ExerciseDescriptor> {
    SAMPLE_EXERCISES
        .iter()
        .zip(1_i64..)
        .map(|(data, id)| ExerciseDescriptor {
            id,
            name: data.name.to_owned(),
            description: data.description.to_owned(),
            target_muscle: data.target_muscle.to_owned(),
            equipment: data.equipment.to_owned(),
            difficulty: data.difficulty,
            instructions: data.instructions.to_owned(),
            embedding: Vec::new(),
        })
        .collect()
}

/// Corpus provider over a fixed list of records
#[derive(Debug, Clone, Default)]
pub struct StaticCorpusProvider {
    exercises: Vec<ExerciseDescriptor>,
}

impl StaticCorpusProvider {
    /// Provider over `exercises`
    #[must_use]
    pub const fn new(exercises: Vec<ExerciseDescriptor>) -> Self {
        Self { exercises }
    }

    /// Provider over the built-in sample catalog
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_exercises())
    }
}

#[async_trait]
impl CorpusProvider for StaticCorpusProvider {
    async fn load(&self) -> AppResult<Vec<ExerciseDescriptor>> {
        Ok(self.exercises.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
