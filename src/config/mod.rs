// ABOUTME: Configuration module for server settings loaded from the environment
// ABOUTME: Re-exports ServerConfig, EncoderConfig, and the planner tunables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the Kinetic planner server
//!
//! Configuration is environment-only. See [`environment::ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{EncoderConfig, Environment, ServerConfig};
pub use kinetic_core::config::PlannerConfig;
