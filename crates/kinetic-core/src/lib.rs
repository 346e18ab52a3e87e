// ABOUTME: Core types and constants for the Kinetic workout planner
// ABOUTME: Foundation crate with error handling, data model, constants, and planner config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Kinetic Core
//!
//! Foundation crate providing shared types for the Kinetic workout planner.
//! It changes rarely, so the engine and server crates build on it without
//! pulling in each other's dependencies.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the typed `PlanningError`
//! - **models**: exercises, preferences, and plan output types
//! - **constants**: load tables, rest intervals, and planner defaults
//! - **config**: `PlannerConfig` tunables

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;

/// Planner configuration
pub mod config;
