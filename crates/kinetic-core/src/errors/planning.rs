// ABOUTME: Typed errors for workout plan generation
// ABOUTME: Converts planning failures into AppError for HTTP response formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while turning preferences into a plan.
///
/// Encoder unavailability and malformed embeddings are not errors: the engine
/// degrades around them. Only these variants reach the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    /// No exercises are available, even after every fallback
    #[error("no exercises available to build a plan")]
    EmptyCorpus,
    /// A preference field failed validation
    #[error("invalid preference `{field}`: {reason}")]
    InvalidPreferences {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl PlanningError {
    /// Create an invalid preferences error
    #[must_use]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidPreferences {
            field,
            reason: reason.into(),
        }
    }
}

impl From<PlanningError> for AppError {
    fn from(error: PlanningError) -> Self {
        match error {
            PlanningError::EmptyCorpus => Self::empty_corpus(),
            PlanningError::InvalidPreferences { field, reason } => {
                Self::new(ErrorCode::InvalidInput, format!("{field}: {reason}"))
                    .with_details(serde_json::json!({ "field": field }))
            }
        }
    }
}
