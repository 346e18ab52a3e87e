// ABOUTME: Server binary for the Kinetic workout planner HTTP API
// ABOUTME: Loads config, opens and seeds the SQLite corpus, builds the engine, and serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Kinetic planner server
//!
//! Usage:
//! ```bash
//! cargo run --bin kinetic-server
//! cargo run --bin kinetic-server -- --http-port 9000 --database-url sqlite:./data/exercises.db
//! ```

use anyhow::Result;
use clap::Parser;
use kinetic_planner::config::ServerConfig;
use kinetic_planner::corpus::{embed_records, sample_exercises, SeedOutcome, SqliteCorpusProvider};
use kinetic_planner::encoding::build_encoder;
use kinetic_planner::logging;
use kinetic_planner::server::{serve, ServerResources};
use tracing::info;

#[derive(Parser)]
#[command(name = "kinetic-server", about = "Kinetic workout planner HTTP API")]
struct Args {
    /// HTTP port override
    #[arg(long)]
    http_port: Option<u16>,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }
    info!("{}", config.summary());

    let provider = SqliteCorpusProvider::connect(&config.database_url).await?;
    if provider.count().await? == 0 {
        let encoder = build_encoder(config.encoder);
        let records = embed_records(sample_exercises(), encoder.as_ref());
        if let SeedOutcome::Seeded { inserted, .. } = provider.seed(&records, false).await? {
            info!(inserted, "Seeded empty exercise table with the sample catalog");
        }
    }

    let resources = ServerResources::build(config, &provider).await?;
    serve(resources).await
}
