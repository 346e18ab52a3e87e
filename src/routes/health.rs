// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness always answers; readiness reports the loaded corpus size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes
//!
//! `/health` is a liveness probe. `/ready` answers 503 until the corpus
//! holds at least one exercise, since no plan can be built before that.

use crate::constants::routes;
use crate::server::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::health_handler))
            .route(routes::READY, get(Self::ready_handler))
            .with_state(resources)
    }

    async fn health_handler() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler(
        State(resources): State<Arc<ServerResources>>,
    ) -> (StatusCode, Json<Value>) {
        let corpus = resources.engine.corpus();
        let (status, label) = if corpus.is_empty() {
            (StatusCode::SERVICE_UNAVAILABLE, "empty_corpus")
        } else {
            (StatusCode::OK, "ready")
        };

        (
            status,
            Json(json!({
                "status": label,
                "corpus_size": corpus.len(),
                "embedded": corpus.embedded_count(),
                "encoder": resources.engine.encoder_name(),
                "timestamp": Utc::now().to_rfc3339()
            })),
        )
    }
}
