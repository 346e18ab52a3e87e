// ABOUTME: Builds the semantic search query from user preferences
// ABOUTME: Pure string construction with no I/O and no failure modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kinetic_core::constants::query::QUERY_SUFFIX;
use kinetic_core::models::UserPreferences;

/// Build the query text for `preferences`.
///
/// Focus areas, then the user's equipment (as given, without the implied
/// bodyweight tag), then workout type, level, and the fixed suffix, joined by
/// single spaces. Blank entries are skipped.
#[must_use]
pub fn synthesize_query(preferences: &UserPreferences) -> String {
    preferences
        .focus_areas
        .iter()
        .chain(preferences.available_equipment.iter())
        .map(String::as_str)
        .chain([
            preferences.workout_type.as_str(),
            preferences.user_level.as_str(),
            QUERY_SUFFIX,
        ])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
