// ABOUTME: Planning engine wiring filter, query, encoder, ranking, and structuring
// ABOUTME: Holds the shared corpus and encoder; each call draws from its own RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::candidates::{CandidatePolicy, CandidateSelection, CandidateStage, Recommendation};
use crate::corpus::ExerciseCorpus;
use crate::encoder::TextEncoder;
use crate::equipment::filter_by_equipment;
use crate::plan_structurer::PlanStructurer;
use crate::query::synthesize_query;
use kinetic_core::config::PlannerConfig;
use kinetic_core::errors::PlanningError;
use kinetic_core::models::{UserPreferences, WorkoutPlan};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ordered recommendations and the stage they came from
#[derive(Debug, Clone)]
pub struct Recommendations<'a> {
    /// Synthesized query text
    pub query: String,
    /// Stage of the fallback chain that produced them
    pub stage: CandidateStage,
    /// Exercises in scheduling order
    pub exercises: Vec<Recommendation<'a>>,
}

/// Retrieval-and-scheduling engine
///
/// Cheap to share: the corpus and encoder sit behind `Arc`s and are never
/// mutated, so one engine serves concurrent requests without locking.
#[derive(Clone)]
pub struct PlanningEngine {
    corpus: Arc<ExerciseCorpus>,
    encoder: Arc<dyn TextEncoder>,
    config: PlannerConfig,
}

impl fmt::Debug for PlanningEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanningEngine")
            .field("corpus_size", &self.corpus.len())
            .field("encoder", &self.encoder.name())
            .field("config", &self.config)
            .finish()
    }
}

impl PlanningEngine {
    /// Create an engine over `corpus` using `encoder` for queries
    #[must_use]
    pub fn new(
        corpus: Arc<ExerciseCorpus>,
        encoder: Arc<dyn TextEncoder>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            corpus,
            encoder,
            config,
        }
    }

    /// The shared corpus
    #[must_use]
    pub fn corpus(&self) -> &ExerciseCorpus {
        &self.corpus
    }

    /// The planner tunables
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Name of the query encoder
    #[must_use]
    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    const fn policy(&self) -> CandidatePolicy {
        CandidatePolicy {
            top_k: self.config.rank_top_k,
            fallback_limit: self.config.fallback_limit,
        }
    }

    /// Build a plan with a fresh RNG (seeded from config when set)
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidPreferences` for out-of-range input and
    /// `PlanningError::EmptyCorpus` when there is nothing to schedule.
    pub fn generate_plan(&self, preferences: &UserPreferences) -> Result<WorkoutPlan, PlanningError> {
        let mut rng = self
            .config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        self.generate_plan_with_rng(preferences, &mut rng)
    }

    /// Build a plan drawing load parameters from `rng`
    ///
    /// # Errors
    ///
    /// Same as [`PlanningEngine::generate_plan`].
    pub fn generate_plan_with_rng<R: Rng + ?Sized>(
        &self,
        preferences: &UserPreferences,
        rng: &mut R,
    ) -> Result<WorkoutPlan, PlanningError> {
        preferences.validate()?;
        let (_, candidates) = self.select_candidates(preferences)?;

        let plan = PlanStructurer::new(self.config.min_exercises_per_day).structure(
            preferences,
            &candidates.descriptors(),
            rng,
        )?;

        info!(
            plan.days = plan.days.len(),
            plan.exercises = plan.exercise_count(),
            plan.workout_type = %plan.workout_type,
            candidates.stage = %candidates.stage,
            "Generated workout plan"
        );
        Ok(plan)
    }

    /// Ordered candidates for `preferences` without scheduling them
    ///
    /// # Errors
    ///
    /// Same as [`PlanningEngine::generate_plan`].
    pub fn recommend(&self, preferences: &UserPreferences) -> Result<Recommendations<'_>, PlanningError> {
        preferences.validate()?;
        let (query, selection) = self.select_candidates(preferences)?;
        Ok(Recommendations {
            query,
            stage: selection.stage,
            exercises: selection.exercises,
        })
    }

    fn select_candidates(
        &self,
        preferences: &UserPreferences,
    ) -> Result<(String, CandidateSelection<'_>), PlanningError> {
        if self.corpus.is_empty() {
            return Err(PlanningError::EmptyCorpus);
        }

        let filtered = filter_by_equipment(self.corpus.exercises(), &preferences.available_equipment);
        let query = synthesize_query(preferences);
        let vector = self.encode_query(&query);

        let selection = self
            .policy()
            .select(&vector, &filtered)
            .ok_or(PlanningError::EmptyCorpus)?;

        debug!(
            query = %query,
            filtered = filtered.len(),
            stage = %selection.stage,
            selected = selection.exercises.len(),
            "Selected plan candidates"
        );
        Ok((query, selection))
    }

    fn encode_query(&self, query: &str) -> Vec<f32> {
        let vector = self.encoder.encode(query);
        if vector.is_empty() {
            warn!(
                encoder = self.encoder.name(),
                "Query encoder unavailable, candidates will not be ranked"
            );
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{FixedVectorEncoder, UnavailableEncoder};
    use kinetic_core::models::{ExerciseDescriptor, FitnessLevel, WorkoutType};

    fn exercise(id: i64, equipment: &str, embedding: Vec<f32>) -> ExerciseDescriptor {
        ExerciseDescriptor {
            id,
            name: format!("Exercise {id}"),
            description: "Strength move".into(),
            target_muscle: "chest".into(),
            equipment: equipment.into(),
            difficulty: FitnessLevel::Beginner,
            instructions: String::new(),
            embedding,
        }
    }

    fn preferences(days: u8) -> UserPreferences {
        UserPreferences {
            focus_areas: vec!["chest".into()],
            available_equipment: vec![],
            workout_type: WorkoutType::Strength,
            user_level: FitnessLevel::Beginner,
            days_per_week: days,
            session_duration: 45,
        }
    }

    fn engine(corpus: Vec<ExerciseDescriptor>, encoder: Arc<dyn TextEncoder>) -> PlanningEngine {
        PlanningEngine::new(
            Arc::new(ExerciseCorpus::new(corpus)),
            encoder,
            PlannerConfig::default(),
        )
    }

    #[test]
    fn test_empty_corpus_is_error() {
        let engine = engine(Vec::new(), Arc::new(UnavailableEncoder));
        assert_eq!(
            engine.generate_plan(&preferences(3)).unwrap_err(),
            PlanningError::EmptyCorpus
        );
        assert_eq!(
            engine.recommend(&preferences(3)).unwrap_err(),
            PlanningError::EmptyCorpus
        );
    }

    #[test]
    fn test_ranked_candidates_feed_the_structurer() {
        let corpus = vec![
            exercise(1, "bodyweight", vec![0.0, 1.0]),
            exercise(2, "bodyweight", vec![1.0, 0.0]),
        ];
        let engine = engine(corpus, Arc::new(FixedVectorEncoder::new(vec![1.0, 0.0])));

        let recommendations = engine.recommend(&preferences(1)).unwrap();
        assert_eq!(recommendations.stage, CandidateStage::Ranked);
        assert_eq!(recommendations.exercises[0].exercise.id, 2);
        assert!(recommendations.exercises[0].similarity.unwrap() > 0.99);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let plan = engine
            .generate_plan_with_rng(&preferences(1), &mut rng)
            .unwrap();
        let ids: Vec<i64> = plan.days[0].exercises.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_recommend_and_plan_use_the_same_selection() {
        let corpus = vec![
            exercise(1, "bodyweight", Vec::new()),
            exercise(2, "bodyweight", vec![0.6, 0.8]),
            exercise(3, "bodyweight", vec![1.0, 0.0]),
            exercise(4, "bodyweight", Vec::new()),
        ];
        let engine = engine(corpus, Arc::new(FixedVectorEncoder::new(vec![1.0, 0.0])));

        let recommendations = engine.recommend(&preferences(1)).unwrap();
        assert_eq!(recommendations.stage, CandidateStage::Ranked);
        let recommended: Vec<i64> = recommendations.exercises.iter().map(|r| r.exercise.id).collect();
        assert_eq!(recommended, vec![3, 2]);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let plan = engine
            .generate_plan_with_rng(&preferences(1), &mut rng)
            .unwrap();
        let planned: Vec<i64> = plan.days[0].exercises.iter().map(|e| e.id).collect();
        assert_eq!(planned, recommended);
    }

    #[test]
    fn test_unavailable_encoder_keeps_insertion_order() {
        let corpus: Vec<ExerciseDescriptor> = (1..=5)
            .map(|id| exercise(id, "bodyweight", vec![1.0, 0.0]))
            .collect();
        let engine = engine(corpus, Arc::new(UnavailableEncoder));

        let recommendations = engine.recommend(&preferences(1)).unwrap();
        assert_eq!(recommendations.stage, CandidateStage::InsertionOrder);
        assert!(recommendations.exercises.iter().all(|r| r.similarity.is_none()));
        let ids: Vec<i64> = recommendations.exercises.iter().map(|r| r.exercise.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let corpus: Vec<ExerciseDescriptor> = (1..=8)
            .map(|id| exercise(id, "bodyweight", Vec::new()))
            .collect();
        let engine = PlanningEngine::new(
            Arc::new(ExerciseCorpus::new(corpus)),
            Arc::new(UnavailableEncoder),
            PlannerConfig::default().with_seed(99),
        );

        let first = engine.generate_plan(&preferences(2)).unwrap();
        let second = engine.generate_plan(&preferences(2)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_preferences_reported() {
        let engine = engine(
            vec![exercise(1, "bodyweight", Vec::new())],
            Arc::new(UnavailableEncoder),
        );
        assert!(matches!(
            engine.generate_plan(&preferences(8)),
            Err(PlanningError::InvalidPreferences {
                field: "days_per_week",
                ..
            })
        ));
    }
}
