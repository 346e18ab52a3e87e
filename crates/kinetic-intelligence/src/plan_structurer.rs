// ABOUTME: Partitions candidate exercises into training days with load parameters
// ABOUTME: Draws sets, reps, and durations from level ranges using a caller-supplied RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kinetic_core::constants::{load::CARDIO_DURATION_SECONDS, query::CARDIO_KEYWORD};
use kinetic_core::errors::PlanningError;
use kinetic_core::models::{
    DayPlan, ExerciseDescriptor, LoadProfile, PlannedExercise, Prescription, UserPreferences,
    WorkoutPlan, WorkoutType,
};
use rand::Rng;

/// Builds a [`WorkoutPlan`] from ordered candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanStructurer {
    min_exercises_per_day: usize,
}

impl PlanStructurer {
    /// Create a structurer with the given per-day floor
    #[must_use]
    pub const fn new(min_exercises_per_day: usize) -> Self {
        Self {
            min_exercises_per_day,
        }
    }

    /// Exercises scheduled per day for `candidate_count` candidates
    #[must_use]
    pub fn exercises_per_day(&self, candidate_count: usize, days_per_week: u8) -> usize {
        let days = usize::from(days_per_week).max(1);
        self.min_exercises_per_day.max(candidate_count / days)
    }

    /// Lay `candidates` out over `preferences.days_per_week` days.
    ///
    /// Day `d` takes the contiguous slice starting at `(d - 1) * per_day`;
    /// once candidates run out, later days repeat the front of the list.
    /// For every exercise the RNG is drawn for sets, then reps, then (timed
    /// entries only) duration.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::EmptyCorpus` if `candidates` is empty, or
    /// `PlanningError::InvalidPreferences` if the preferences fail validation.
    pub fn structure<R: Rng + ?Sized>(
        &self,
        preferences: &UserPreferences,
        candidates: &[&ExerciseDescriptor],
        rng: &mut R,
    ) -> Result<WorkoutPlan, PlanningError> {
        preferences.validate()?;
        if candidates.is_empty() {
            return Err(PlanningError::EmptyCorpus);
        }

        let profile = preferences.user_level.load_profile();
        let rest_time = preferences.workout_type.rest_seconds();
        let per_day = self.exercises_per_day(candidates.len(), preferences.days_per_week);

        let days = (1..=preferences.days_per_week)
            .map(|day| {
                let exercises = day_slice(candidates, usize::from(day), per_day)
                    .iter()
                    .zip(1_u32..)
                    .map(|(exercise, order)| {
                        let (sets, prescription) =
                            draw_load(&mut *rng, profile, preferences.workout_type, exercise);
                        PlannedExercise::new(exercise, sets, prescription, rest_time, order)
                    })
                    .collect();
                DayPlan { day, exercises }
            })
            .collect();

        Ok(WorkoutPlan {
            name: format!("{} Workout Plan", preferences.workout_type.title()),
            description: format!(
                "A {}-day {} workout plan",
                preferences.days_per_week, preferences.workout_type
            ),
            days_per_week: preferences.days_per_week,
            session_duration: preferences.session_duration,
            workout_type: preferences.workout_type,
            user_level: preferences.user_level,
            days,
        })
    }
}

/// Candidates for 1-based `day`, wrapping to the front once exhausted
fn day_slice<'c, 'a>(
    candidates: &'c [&'a ExerciseDescriptor],
    day: usize,
    per_day: usize,
) -> &'c [&'a ExerciseDescriptor] {
    let start = (day - 1) * per_day;
    if start < candidates.len() {
        let end = (start + per_day).min(candidates.len());
        &candidates[start..end]
    } else {
        &candidates[..per_day.min(candidates.len())]
    }
}

/// Whether an exercise is prescribed by time rather than reps
fn is_timed(workout_type: WorkoutType, exercise: &ExerciseDescriptor) -> bool {
    workout_type == WorkoutType::Cardio
        || exercise.description.to_lowercase().contains(CARDIO_KEYWORD)
}

fn draw_load<R: Rng + ?Sized>(
    rng: &mut R,
    profile: LoadProfile,
    workout_type: WorkoutType,
    exercise: &ExerciseDescriptor,
) -> (u32, Prescription) {
    let sets = rng.gen_range(profile.sets.0..=profile.sets.1);
    let reps = rng.gen_range(profile.reps.0..=profile.reps.1);
    let prescription = if is_timed(workout_type, exercise) {
        Prescription::Duration(rng.gen_range(CARDIO_DURATION_SECONDS.0..=CARDIO_DURATION_SECONDS.1))
    } else {
        Prescription::Reps(reps)
    };
    (sets, prescription)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::models::FitnessLevel;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn exercise(id: i64, description: &str) -> ExerciseDescriptor {
        ExerciseDescriptor {
            id,
            name: format!("Exercise {id}"),
            description: description.into(),
            target_muscle: "legs".into(),
            equipment: "bodyweight".into(),
            difficulty: FitnessLevel::Beginner,
            instructions: String::new(),
            embedding: Vec::new(),
        }
    }

    fn corpus(count: i64) -> Vec<ExerciseDescriptor> {
        (1..=count).map(|id| exercise(id, "Strength move")).collect()
    }

    fn preferences(workout_type: WorkoutType, level: FitnessLevel, days: u8) -> UserPreferences {
        UserPreferences {
            focus_areas: vec![],
            available_equipment: vec![],
            workout_type,
            user_level: level,
            days_per_week: days,
            session_duration: 60,
        }
    }

    fn day_ids(plan: &WorkoutPlan, day: usize) -> Vec<i64> {
        plan.days[day].exercises.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_exercises_per_day_floor() {
        let structurer = PlanStructurer::new(4);
        assert_eq!(structurer.exercises_per_day(10, 3), 4);
        assert_eq!(structurer.exercises_per_day(20, 2), 10);
        assert_eq!(structurer.exercises_per_day(0, 1), 4);
        assert_eq!(PlanStructurer::new(5).exercises_per_day(10, 3), 5);
    }

    #[test]
    fn test_contiguous_slices_and_wraparound() {
        let corpus = corpus(10);
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let plan = PlanStructurer::new(4)
            .structure(
                &preferences(WorkoutType::Strength, FitnessLevel::Beginner, 4),
                &candidates,
                &mut rng,
            )
            .unwrap();

        assert_eq!(day_ids(&plan, 0), vec![1, 2, 3, 4]);
        assert_eq!(day_ids(&plan, 1), vec![5, 6, 7, 8]);
        assert_eq!(day_ids(&plan, 2), vec![9, 10]);
        assert_eq!(day_ids(&plan, 3), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_short_list_wraps_every_later_day() {
        let corpus = corpus(2);
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let plan = PlanStructurer::new(4)
            .structure(
                &preferences(WorkoutType::Mixed, FitnessLevel::Advanced, 7),
                &candidates,
                &mut rng,
            )
            .unwrap();

        assert_eq!(plan.days.len(), 7);
        for day in 0..7 {
            assert_eq!(day_ids(&plan, day), vec![1, 2]);
        }
    }

    #[test]
    fn test_days_are_contiguous_and_orders_one_based() {
        let corpus = corpus(12);
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for days in 1..=7 {
            let plan = PlanStructurer::new(4)
                .structure(
                    &preferences(WorkoutType::Flexibility, FitnessLevel::Intermediate, days),
                    &candidates,
                    &mut rng,
                )
                .unwrap();
            let numbers: Vec<u8> = plan.days.iter().map(|d| d.day).collect();
            assert_eq!(numbers, (1..=days).collect::<Vec<_>>());
            for day in &plan.days {
                let orders: Vec<u32> = day.exercises.iter().map(|e| e.order).collect();
                assert_eq!(orders, (1..=day.exercises.len() as u32).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_load_ranges_per_level() {
        let corpus = corpus(20);
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for level in [
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ] {
            let profile = level.load_profile();
            let plan = PlanStructurer::new(4)
                .structure(
                    &preferences(WorkoutType::Strength, level, 2),
                    &candidates,
                    &mut rng,
                )
                .unwrap();
            for entry in plan.exercises() {
                assert!((profile.sets.0..=profile.sets.1).contains(&entry.sets));
                let reps = entry.prescription.reps().unwrap();
                assert!((profile.reps.0..=profile.reps.1).contains(&reps));
                assert_eq!(entry.rest_time, 60);
            }
        }
    }

    #[test]
    fn test_cardio_plan_is_fully_timed() {
        let corpus = corpus(8);
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let plan = PlanStructurer::new(4)
            .structure(
                &preferences(WorkoutType::Cardio, FitnessLevel::Beginner, 2),
                &candidates,
                &mut rng,
            )
            .unwrap();

        for entry in plan.exercises() {
            let duration = entry.prescription.duration().unwrap();
            assert!((30..=60).contains(&duration));
            assert!(entry.prescription.reps().is_none());
            assert_eq!(entry.rest_time, 30);
        }
    }

    #[test]
    fn test_cardio_description_forces_duration_in_strength_plan() {
        let corpus = vec![
            exercise(1, "Full-body CARDIO exercise"),
            exercise(2, "Chest press"),
        ];
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let plan = PlanStructurer::new(4)
            .structure(
                &preferences(WorkoutType::Strength, FitnessLevel::Beginner, 1),
                &candidates,
                &mut rng,
            )
            .unwrap();

        let entries = &plan.days[0].exercises;
        assert!(matches!(entries[0].prescription, Prescription::Duration(_)));
        assert!(matches!(entries[1].prescription, Prescription::Reps(_)));
        assert!(entries.iter().all(|e| e.rest_time == 60));
    }

    #[test]
    fn test_plan_metadata() {
        let corpus = corpus(4);
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let plan = PlanStructurer::new(4)
            .structure(
                &preferences(WorkoutType::Strength, FitnessLevel::Beginner, 3),
                &candidates,
                &mut rng,
            )
            .unwrap();

        assert_eq!(plan.name, "Strength Workout Plan");
        assert_eq!(plan.description, "A 3-day strength workout plan");
        assert_eq!(plan.session_duration, 60);
        assert_eq!(plan.days_per_week, 3);
    }

    #[test]
    fn test_same_seed_same_plan() {
        let corpus = corpus(9);
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();
        let prefs = preferences(WorkoutType::Mixed, FitnessLevel::Advanced, 3);
        let structurer = PlanStructurer::new(4);

        let first = structurer
            .structure(&prefs, &candidates, &mut ChaCha8Rng::seed_from_u64(42))
            .unwrap();
        let second = structurer
            .structure(&prefs, &candidates, &mut ChaCha8Rng::seed_from_u64(42))
            .unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_candidates_is_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let result = PlanStructurer::new(4).structure(
            &preferences(WorkoutType::Strength, FitnessLevel::Beginner, 3),
            &[],
            &mut rng,
        );
        assert_eq!(result.unwrap_err(), PlanningError::EmptyCorpus);
    }

    #[test]
    fn test_invalid_days_rejected_before_structuring() {
        let corpus = corpus(4);
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let result = PlanStructurer::new(4).structure(
            &preferences(WorkoutType::Strength, FitnessLevel::Beginner, 0),
            &candidates,
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(PlanningError::InvalidPreferences { .. })
        ));
    }
}
