// ABOUTME: Workout plan route handler
// ABOUTME: Accepts user preferences as JSON and returns a generated multi-day plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::routes;
use crate::server::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use kinetic_core::errors::AppError;
use kinetic_core::models::UserPreferences;
use std::sync::Arc;
use tracing::debug;

/// Workout planning routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::WORKOUT_PLAN, post(Self::handle_generate_plan))
            .with_state(resources)
    }

    /// Handle plan generation
    ///
    /// Malformed bodies are reported as `INVALID_INPUT` rather than axum's
    /// default plain-text rejection.
    async fn handle_generate_plan(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<UserPreferences>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(preferences) =
            payload.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;

        debug!(
            workout_type = %preferences.workout_type,
            user_level = %preferences.user_level,
            days_per_week = preferences.days_per_week,
            "Plan requested"
        );

        let plan = resources.engine.generate_plan(&preferences)?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
