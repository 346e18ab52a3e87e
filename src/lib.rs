// ABOUTME: Main library entry point for the Kinetic workout planner server
// ABOUTME: Configuration, logging, corpus providers, and the HTTP surface over the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Kinetic Planner
//!
//! Serves multi-day workout plans built by `kinetic-intelligence`. The
//! engine is synchronous and pure; this crate supplies what surrounds it:
//! environment configuration, structured logging, `SQLite` and built-in
//! corpus providers, and an axum router.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kinetic_planner::config::ServerConfig;
//! use kinetic_planner::corpus::StaticCorpusProvider;
//! use kinetic_planner::server::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::build(config, &StaticCorpusProvider::sample()).await?;
//!     kinetic_planner::server::serve(resources).await
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Server constants: environment variable names, routes, defaults
pub mod constants;

/// Exercise corpus providers
pub mod corpus;

/// Text encoder construction from configuration
pub mod encoding;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP routes
pub mod routes;

/// Router assembly and serve loop
pub mod server;

pub use kinetic_core::models;
pub use kinetic_intelligence as intelligence;
