// ABOUTME: Equipment-based candidate filtering with full-corpus fallback
// ABOUTME: Bodyweight is always available and tags compare case-insensitively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kinetic_core::constants::equipment::BODYWEIGHT;
use kinetic_core::models::ExerciseDescriptor;
use std::collections::HashSet;
use std::iter;

/// Canonical form of an equipment tag
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Normalized set of usable equipment, always including bodyweight
#[must_use]
pub fn available_equipment(requested: &[String]) -> HashSet<String> {
    requested
        .iter()
        .map(|tag| normalize_tag(tag))
        .filter(|tag| !tag.is_empty())
        .chain(iter::once(BODYWEIGHT.to_owned()))
        .collect()
}

/// Keep exercises whose equipment the user has, in corpus order.
///
/// The constraint is advisory: when nothing matches, the whole corpus is
/// returned so a plan can still be built.
#[must_use]
pub fn filter_by_equipment<'a>(
    corpus: &'a [ExerciseDescriptor],
    requested: &[String],
) -> Vec<&'a ExerciseDescriptor> {
    let available = available_equipment(requested);
    let filtered: Vec<&ExerciseDescriptor> = corpus
        .iter()
        .filter(|exercise| available.contains(&normalize_tag(&exercise.equipment)))
        .collect();

    if filtered.is_empty() {
        tracing::debug!(
            corpus.size = corpus.len(),
            "No exercise matches available equipment, using full corpus"
        );
        return corpus.iter().collect();
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::models::FitnessLevel;

    fn exercise(id: i64, equipment: &str) -> ExerciseDescriptor {
        ExerciseDescriptor {
            id,
            name: format!("Exercise {id}"),
            description: String::new(),
            target_muscle: "legs".into(),
            equipment: equipment.into(),
            difficulty: FitnessLevel::Beginner,
            instructions: String::new(),
            embedding: Vec::new(),
        }
    }

    fn ids(exercises: &[&ExerciseDescriptor]) -> Vec<i64> {
        exercises.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_bodyweight_always_available() {
        let corpus = [exercise(1, "bodyweight"), exercise(2, "dumbbells")];
        assert_eq!(ids(&filter_by_equipment(&corpus, &[])), vec![1]);
    }

    #[test]
    fn test_tags_are_case_insensitive() {
        let corpus = [exercise(1, "Barbell"), exercise(2, "kettlebell")];
        let requested = vec!["BARBELL ".to_owned()];
        assert_eq!(ids(&filter_by_equipment(&corpus, &requested)), vec![1]);
    }

    #[test]
    fn test_single_barbell_plus_all_bodyweight() {
        let corpus = [
            exercise(1, "bodyweight"),
            exercise(2, "dumbbells"),
            exercise(3, "barbell"),
            exercise(4, "BodyWeight"),
        ];
        let requested = vec!["barbell".to_owned()];
        assert_eq!(ids(&filter_by_equipment(&corpus, &requested)), vec![1, 3, 4]);
    }

    #[test]
    fn test_no_match_falls_back_to_full_corpus() {
        let corpus = [exercise(1, "rower"), exercise(2, "dumbbells")];
        let requested = vec!["barbell".to_owned()];
        assert_eq!(ids(&filter_by_equipment(&corpus, &requested)), vec![1, 2]);
    }

    #[test]
    fn test_available_equipment_normalizes() {
        let set = available_equipment(&["Dumbbells".to_owned(), " ".to_owned()]);
        assert!(set.contains("dumbbells"));
        assert!(set.contains(BODYWEIGHT));
        assert_eq!(set.len(), 2);
    }
}
