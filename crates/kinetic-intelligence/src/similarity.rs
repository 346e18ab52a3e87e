// ABOUTME: Cosine similarity ranking of exercises against a query vector
// ABOUTME: Stable top-K ordering with ties broken by original corpus position
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kinetic_core::models::ExerciseDescriptor;
use rayon::prelude::*;

/// An exercise paired with its similarity to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedExercise<'a> {
    /// The ranked exercise
    pub exercise: &'a ExerciseDescriptor,
    /// Cosine similarity in [-1, 1]
    pub similarity: f32,
}

/// Cosine similarity between two vectors of equal length
///
/// Returns 0.0 when either vector has zero magnitude or the lengths differ.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

/// Rank `candidates` by similarity to `query` and keep the best `top_k`.
///
/// Candidates without an embedding of the query's dimension carry no signal
/// and are left out. The sort is stable, so equal scores keep the order the
/// candidates were given in. Returns an empty list when `query` or
/// `candidates` is empty.
#[must_use]
pub fn rank<'a>(
    query: &[f32],
    candidates: &[&'a ExerciseDescriptor],
    top_k: usize,
) -> Vec<RankedExercise<'a>> {
    if query.is_empty() || candidates.is_empty() {
        return Vec::new();
    }

    // Parallel collect preserves input order, which the stable sort relies on
    let mut ranked: Vec<RankedExercise<'a>> = candidates
        .par_iter()
        .filter(|exercise| exercise.embedding.len() == query.len())
        .map(|&exercise| RankedExercise {
            exercise,
            similarity: cosine_similarity(query, &exercise.embedding),
        })
        .collect();

    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    ranked.truncate(top_k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::models::FitnessLevel;

    fn exercise(id: i64, embedding: Vec<f32>) -> ExerciseDescriptor {
        ExerciseDescriptor {
            id,
            name: format!("Exercise {id}"),
            description: String::new(),
            target_muscle: "core".into(),
            equipment: "bodyweight".into(),
            difficulty: FitnessLevel::Beginner,
            instructions: String::new(),
            embedding,
        }
    }

    #[test]
    fn test_cosine_similarity_basics() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_norm_is_zero_similarity() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 1.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_rank_orders_by_similarity_descending() {
        let corpus = [
            exercise(1, vec![0.0, 1.0]),
            exercise(2, vec![1.0, 0.0]),
            exercise(3, vec![1.0, 1.0]),
        ];
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();

        let ranked = rank(&[1.0, 0.0], &candidates, 10);

        let ids: Vec<i64> = ranked.iter().map(|r| r.exercise.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(ranked.windows(2).all(|w| w[0].similarity >= w[1].similarity));
    }

    #[test]
    fn test_ties_keep_original_order() {
        let corpus: Vec<ExerciseDescriptor> =
            (1..=6).map(|id| exercise(id, vec![1.0, 0.0])).collect();
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();

        let ranked = rank(&[2.0, 0.0], &candidates, 10);

        let ids: Vec<i64> = ranked.iter().map(|r| r.exercise.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_rank_truncates_to_top_k() {
        let corpus: Vec<ExerciseDescriptor> = (1..=5)
            .map(|id| exercise(id, vec![1.0, id as f32]))
            .collect();
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();

        assert_eq!(rank(&[0.0, 1.0], &candidates, 2).len(), 2);
    }

    #[test]
    fn test_empty_inputs_give_empty_ranking() {
        let corpus = [exercise(1, vec![1.0])];
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();
        assert!(rank(&[], &candidates, 5).is_empty());
        assert!(rank(&[1.0], &[], 5).is_empty());
    }

    #[test]
    fn test_unembedded_and_mismatched_candidates_are_skipped() {
        let corpus = [
            exercise(1, Vec::new()),
            exercise(2, vec![1.0, 0.0, 0.0]),
            exercise(3, vec![1.0, 0.0]),
        ];
        let candidates: Vec<&ExerciseDescriptor> = corpus.iter().collect();

        let ranked = rank(&[1.0, 0.0], &candidates, 10);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].exercise.id, 3);
    }
}
