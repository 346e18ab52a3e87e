// ABOUTME: Builds the configured text encoder for queries and corpus backfill
// ABOUTME: Maps EncoderConfig onto the encoders shipped with kinetic-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::EncoderConfig;
use kinetic_intelligence::{HashingEncoder, TextEncoder, UnavailableEncoder};
use std::sync::Arc;
use tracing::info;

/// Construct the encoder selected by `config`
#[must_use]
pub fn build_encoder(config: EncoderConfig) -> Arc<dyn TextEncoder> {
    let encoder: Arc<dyn TextEncoder> = match config {
        EncoderConfig::Hashing { dimension } => Arc::new(HashingEncoder::new(dimension)),
        EncoderConfig::Disabled => Arc::new(UnavailableEncoder),
    };
    info!(
        encoder = encoder.name(),
        dimension = encoder.dimension(),
        "Text encoder ready"
    );
    encoder
}
