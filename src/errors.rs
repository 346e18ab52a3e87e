// ABOUTME: Error types used across the server, re-exported from kinetic-core
// ABOUTME: AppError converts into a JSON error response with the mapped HTTP status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! The error types live in `kinetic-core` so the engine crate can use them
//! without depending on the server.

pub use kinetic_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, PlanningError,
};
