// ABOUTME: Route module organization for the Kinetic planner HTTP surface
// ABOUTME: Health probes and the workout plan endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes, one module per domain. Handlers stay thin and delegate to
//! the planning engine held in [`ServerResources`](crate::server::ServerResources).

/// Health check and readiness routes
pub mod health;
/// Workout plan generation routes
pub mod workout;

pub use health::HealthRoutes;
pub use workout::WorkoutRoutes;
