// ABOUTME: Kinetic CLI - offline plan generation and exercise recommendations
// ABOUTME: Runs the planning engine against the built-in catalog or a SQLite corpus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Kinetic CLI
//!
//! Usage:
//! ```bash
//! # Three-day beginner strength plan from the built-in catalog
//! kinetic-cli plan --workout-type strength --level beginner --days 3 --focus chest --equipment dumbbells
//!
//! # Reproducible plan
//! kinetic-cli plan --days 4 --seed 42
//!
//! # Ranked recommendations with similarity scores from a database
//! kinetic-cli recommend --focus legs --database-url sqlite:./data/exercises.db
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use kinetic_planner::config::ServerConfig;
use kinetic_planner::corpus::{build_corpus, CorpusProvider, SqliteCorpusProvider, StaticCorpusProvider};
use kinetic_planner::encoding::build_encoder;
use kinetic_planner::intelligence::PlanningEngine;
use kinetic_planner::models::{FitnessLevel, UserPreferences, WorkoutType};
use serde_json::{json, Value};
use std::io;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "kinetic-cli",
    about = "Kinetic workout planner CLI",
    long_about = "Generate workout plans and exercise recommendations without running the server."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Read exercises from this database instead of the built-in catalog
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print a generated plan as JSON
    Plan {
        #[command(flatten)]
        preferences: PreferenceArgs,

        /// Fixed RNG seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print candidate exercises in ranked order with similarity scores
    Recommend {
        #[command(flatten)]
        preferences: PreferenceArgs,
    },
}

#[derive(Args)]
struct PreferenceArgs {
    /// Muscle groups to emphasize (repeat or comma-separate)
    #[arg(long = "focus", value_delimiter = ',')]
    focus_areas: Vec<String>,

    /// Available equipment tags (repeat or comma-separate)
    #[arg(long = "equipment", value_delimiter = ',')]
    available_equipment: Vec<String>,

    /// cardio, strength, flexibility, or mixed
    #[arg(long, default_value = "strength", value_parser = parse_workout_type)]
    workout_type: WorkoutType,

    /// beginner, intermediate, or advanced
    #[arg(long = "level", default_value = "beginner", value_parser = parse_fitness_level)]
    user_level: FitnessLevel,

    /// Training days per week (1-7)
    #[arg(long = "days", default_value_t = 3)]
    days_per_week: u8,

    /// Session length in minutes
    #[arg(long = "duration", default_value_t = 60)]
    session_duration: u32,
}

impl From<PreferenceArgs> for UserPreferences {
    fn from(args: PreferenceArgs) -> Self {
        Self {
            focus_areas: args.focus_areas,
            available_equipment: args.available_equipment,
            workout_type: args.workout_type,
            user_level: args.user_level,
            days_per_week: args.days_per_week,
            session_duration: args.session_duration,
        }
    }
}

fn parse_workout_type(value: &str) -> Result<WorkoutType, String> {
    serde_json::from_value(Value::String(value.trim().to_lowercase()))
        .map_err(|_| format!("unknown workout type '{value}'"))
}

fn parse_fitness_level(value: &str) -> Result<FitnessLevel, String> {
    serde_json::from_value(Value::String(value.trim().to_lowercase()))
        .map_err(|_| format!("unknown fitness level '{value}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let mut config = ServerConfig::from_env()?;
    let encoder = build_encoder(config.encoder);

    let provider: Box<dyn CorpusProvider> = match cli.database_url {
        Some(url) => Box::new(SqliteCorpusProvider::connect(&url).await?),
        None => Box::new(StaticCorpusProvider::sample()),
    };
    let corpus = build_corpus(provider.as_ref(), encoder.as_ref()).await?;

    let output = match cli.command {
        Command::Plan { preferences, seed } => {
            if let Some(seed) = seed {
                config.planner.seed = Some(seed);
            }
            let engine = PlanningEngine::new(Arc::new(corpus), encoder, config.planner);
            let plan = engine.generate_plan(&UserPreferences::from(preferences))?;
            serde_json::to_value(plan)?
        }
        Command::Recommend { preferences } => {
            let engine = PlanningEngine::new(Arc::new(corpus), encoder, config.planner);
            let preferences = UserPreferences::from(preferences);
            let recommendations = engine.recommend(&preferences)?;
            json!({
                "query": recommendations.query,
                "stage": recommendations.stage,
                "exercises": recommendations
                    .exercises
                    .iter()
                    .map(|r| json!({
                        "id": r.exercise.id,
                        "name": r.exercise.name,
                        "target_muscle": r.exercise.target_muscle,
                        "equipment": r.exercise.equipment,
                        "similarity": r.similarity,
                    }))
                    .collect::<Vec<_>>(),
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
