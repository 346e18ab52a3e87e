// ABOUTME: SQLite exercise store used as the persistent corpus provider
// ABOUTME: Schema creation, seeding, and row decoding with tolerant embedding parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CorpusProvider;
use async_trait::async_trait;
use kinetic_core::errors::{AppError, AppResult};
use kinetic_core::models::{ExerciseDescriptor, FitnessLevel};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, info, warn};

const CREATE_EXERCISES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS exercises (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        target_muscle TEXT NOT NULL,
        equipment TEXT NOT NULL,
        difficulty TEXT NOT NULL,
        instructions TEXT NOT NULL,
        embedding TEXT
    )
";

/// Result of a seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Rows already existed and seeding was not forced
    Skipped {
        /// Rows present
        existing: i64,
    },
    /// Rows were written
    Seeded {
        /// Rows inserted
        inserted: usize,
        /// Rows removed first (forced reseed)
        replaced: i64,
    },
}

/// Exercise records stored in `SQLite`
#[derive(Debug, Clone)]
pub struct SqliteCorpusProvider {
    pool: SqlitePool,
}

impl SqliteCorpusProvider {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open `database_url`, creating the file and its directory if needed,
    /// and ensure the schema exists
    ///
    /// # Errors
    ///
    /// Returns a database error if the URL is invalid or the connection fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config_invalid(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let in_memory = database_url.contains(":memory:");
        if !in_memory {
            if let Some(parent) = options.get_filename().parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::database(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }

        // Each in-memory connection is a separate database
        let max_connections = if in_memory { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {database_url}: {e}")))?;

        let provider = Self::new(pool);
        provider.migrate().await?;
        Ok(provider)
    }

    /// The underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `exercises` table if absent
    ///
    /// # Errors
    ///
    /// Returns a database error if the statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(CREATE_EXERCISES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create exercises table: {e}")))?;
        Ok(())
    }

    /// Number of stored exercises
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count exercises: {e}")))?;
        Ok(count)
    }

    /// Insert one exercise, returning its assigned id
    ///
    /// An empty embedding is stored as NULL.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails
    pub async fn insert(&self, exercise: &ExerciseDescriptor) -> AppResult<i64> {
        let embedding = if exercise.has_embedding() {
            Some(serde_json::to_string(&exercise.embedding)?)
        } else {
            None
        };

        let result = sqlx::query(
            r"
            INSERT INTO exercises (name, description, target_muscle, equipment, difficulty, instructions, embedding)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&exercise.name)
        .bind(&exercise.description)
        .bind(&exercise.target_muscle)
        .bind(&exercise.equipment)
        .bind(exercise.difficulty.as_str())
        .bind(&exercise.instructions)
        .bind(embedding)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert exercise {}: {e}", exercise.name)))?;

        Ok(result.last_insert_rowid())
    }

    /// Delete every stored exercise, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns a database error if the delete fails
    pub async fn clear(&self) -> AppResult<i64> {
        let result = sqlx::query("DELETE FROM exercises")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear exercises: {e}")))?;
        Ok(i64::try_from(result.rows_affected()).unwrap_or(i64::MAX))
    }

    /// Insert `exercises` unless rows already exist; `force` replaces them
    ///
    /// # Errors
    ///
    /// Returns a database error if any statement fails
    pub async fn seed(&self, exercises: &[ExerciseDescriptor], force: bool) -> AppResult<SeedOutcome> {
        let existing = self.count().await?;
        if existing > 0 && !force {
            info!(existing, "Exercises already seeded, skipping");
            return Ok(SeedOutcome::Skipped { existing });
        }

        let replaced = if existing > 0 { self.clear().await? } else { 0 };
        for exercise in exercises {
            let id = self.insert(exercise).await?;
            debug!(id, name = %exercise.name, "Seeded exercise");
        }

        info!(inserted = exercises.len(), replaced, "Seeded exercise catalog");
        Ok(SeedOutcome::Seeded {
            inserted: exercises.len(),
            replaced,
        })
    }

    /// All exercises ordered by id
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list(&self) -> AppResult<Vec<ExerciseDescriptor>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, description, target_muscle, equipment, difficulty, instructions, embedding
            FROM exercises
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        Ok(rows.iter().map(row_to_exercise).collect())
    }
}

#[async_trait]
impl CorpusProvider for SqliteCorpusProvider {
    async fn load(&self) -> AppResult<Vec<ExerciseDescriptor>> {
        self.list().await
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}

fn row_to_exercise(row: &SqliteRow) -> ExerciseDescriptor {
    let id: i64 = row.get("id");
    let difficulty: String = row.get("difficulty");
    let embedding_json: Option<String> = row.get("embedding");

    ExerciseDescriptor {
        id,
        name: row.get("name"),
        description: row.get("description"),
        target_muscle: row.get("target_muscle"),
        equipment: row.get("equipment"),
        difficulty: FitnessLevel::parse(&difficulty),
        instructions: row.get("instructions"),
        embedding: embedding_json
            .map(|json| decode_embedding(id, &json))
            .unwrap_or_default(),
    }
}

/// Decode a stored embedding; undecodable values yield an empty vector
#[must_use]
pub fn decode_embedding(id: i64, json: &str) -> Vec<f32> {
    match serde_json::from_str::<Vec<f32>>(json) {
        Ok(embedding) => embedding,
        Err(e) => {
            warn!(exercise.id = id, error = %e, "Ignoring malformed exercise embedding");
            Vec::new()
        }
    }
}
