// ABOUTME: Corpus provider boundary and corpus construction with embedding backfill
// ABOUTME: Providers load raw exercise records; the engine only sees the built corpus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise corpus sources
//!
//! A [`CorpusProvider`] yields exercise records once at startup. Records are
//! then wrapped into an immutable [`ExerciseCorpus`], encoding any record
//! that has no stored embedding.

/// Built-in sample catalog
pub mod catalog;
/// `SQLite`-backed exercise store
pub mod sqlite;

pub use catalog::{sample_exercises, StaticCorpusProvider};
pub use sqlite::{SeedOutcome, SqliteCorpusProvider};

use async_trait::async_trait;
use kinetic_core::errors::AppResult;
use kinetic_core::models::ExerciseDescriptor;
use kinetic_intelligence::{ExerciseCorpus, TextEncoder};
use tracing::info;

/// Source of exercise records
#[async_trait]
pub trait CorpusProvider: Send + Sync {
    /// Load every record in insertion order
    async fn load(&self) -> AppResult<Vec<ExerciseDescriptor>>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Load records from `provider` and build the shared corpus
///
/// # Errors
///
/// Returns the provider's error if loading fails
pub async fn build_corpus(
    provider: &dyn CorpusProvider,
    encoder: &dyn TextEncoder,
) -> AppResult<ExerciseCorpus> {
    let records = provider.load().await?;
    let corpus = ExerciseCorpus::build_with_encoder(records, encoder);
    info!(
        provider = provider.name(),
        corpus.size = corpus.len(),
        corpus.embedded = corpus.embedded_count(),
        "Exercise corpus loaded"
    );
    Ok(corpus)
}

/// Encode records lacking an embedding so they can be stored with one
#[must_use]
pub fn embed_records(
    records: Vec<ExerciseDescriptor>,
    encoder: &dyn TextEncoder,
) -> Vec<ExerciseDescriptor> {
    ExerciseCorpus::build_with_encoder(records, encoder).into_exercises()
}
