// ABOUTME: Exercise catalog seeding utility for the Kinetic planner
// ABOUTME: Creates the exercises table and inserts the sample catalog with embeddings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise catalog seeder.
//!
//! Usage:
//! ```bash
//! # Seed exercises (uses DATABASE_URL from environment)
//! cargo run --bin seed-exercises
//!
//! # Override database URL
//! cargo run --bin seed-exercises -- --database-url sqlite:./data/exercises.db
//!
//! # Force re-seed (replaces existing rows)
//! cargo run --bin seed-exercises -- --force
//! ```

use anyhow::Result;
use clap::Parser;
use kinetic_planner::config::ServerConfig;
use kinetic_planner::corpus::{embed_records, sample_exercises, SeedOutcome, SqliteCorpusProvider};
use kinetic_planner::encoding::build_encoder;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-exercises",
    about = "Kinetic planner exercise catalog seeder",
    long_about = "Create the exercises table and insert the sample exercise catalog with precomputed embeddings"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Force re-seed even if exercises already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Kinetic Exercise Catalog Seeder ===");

    let config = ServerConfig::from_env()?;
    let database_url = args.database_url.unwrap_or(config.database_url);

    info!("Connecting to database: {database_url}");
    let provider = SqliteCorpusProvider::connect(&database_url).await?;

    let encoder = build_encoder(config.encoder);
    let records = embed_records(sample_exercises(), encoder.as_ref());

    match provider.seed(&records, args.force).await? {
        SeedOutcome::Skipped { existing } => {
            info!("Database already has {existing} exercises. Use --force to re-seed.");
        }
        SeedOutcome::Seeded { inserted, replaced } => {
            if replaced > 0 {
                info!("Removed {replaced} existing exercises");
            }
            for record in &records {
                info!("Added exercise: {}", record.name);
            }
            info!("=== Seeding Complete: {inserted} exercises ===");
        }
    }

    Ok(())
}
