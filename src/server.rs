// ABOUTME: HTTP server assembly: shared resources, router, middleware, and serve loop
// ABOUTME: Builds the engine from config and a corpus provider, then serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::corpus::{build_corpus, CorpusProvider};
use crate::encoding::build_encoder;
use crate::routes::{HealthRoutes, WorkoutRoutes};
use anyhow::Result;
use axum::{
    http::{HeaderName, Method},
    Router,
};
use kinetic_core::errors::AppResult;
use kinetic_intelligence::PlanningEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// The planning engine
    pub engine: Arc<PlanningEngine>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wrap an engine and its configuration
    #[must_use]
    pub fn new(engine: PlanningEngine, config: ServerConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }

    /// Load the corpus from `provider`, encode it, and build the engine
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the corpus cannot be loaded
    pub async fn build(config: ServerConfig, provider: &dyn CorpusProvider) -> AppResult<Self> {
        let encoder = build_encoder(config.encoder);
        let corpus = build_corpus(provider, encoder.as_ref()).await?;
        if corpus.is_empty() {
            warn!("Exercise corpus is empty; plan requests will fail until it is seeded");
        }
        let engine = PlanningEngine::new(Arc::new(corpus), encoder, config.planner.clone());
        Ok(Self::new(engine, config))
    }
}

/// Permissive CORS for the planner API
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

/// Full application router with tracing and CORS
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(WorkoutRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Serve on `0.0.0.0:{http_port}` until Ctrl-C
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails
pub async fn serve(resources: ServerResources) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Kinetic planner listening");

    axum::serve(listener, router(Arc::new(resources)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, shutting down");
        return;
    }
    info!("Ctrl-C received, shutting down gracefully");
}
