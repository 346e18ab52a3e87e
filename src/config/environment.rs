// ABOUTME: Environment-based server configuration with validated numeric settings
// ABOUTME: Reads port, database URL, planner tunables, and encoder selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, env_vars, server};
use anyhow::{bail, Context, Result};
use kinetic_core::config::PlannerConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        })
    }
}

/// Which text encoder embeds queries and backfills the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EncoderConfig {
    /// Local feature-hashing encoder
    Hashing {
        /// Vector dimension
        dimension: usize,
    },
    /// No encoder; plans use insertion-order candidates
    Disabled,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::Hashing {
            dimension: defaults::EMBEDDING_DIMENSION,
        }
    }
}

impl Display for EncoderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hashing { dimension } => write!(f, "hashing ({dimension} dims)"),
            Self::Disabled => f.write_str("disabled"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Corpus database URL
    pub database_url: String,
    /// Deployment environment
    pub environment: Environment,
    /// Planner tunables
    pub planner: PlannerConfig,
    /// Encoder selection
    pub encoder: EncoderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: server::DEFAULT_HTTP_PORT,
            database_url: server::DEFAULT_DATABASE_URL.to_owned(),
            environment: Environment::default(),
            planner: PlannerConfig::default(),
            encoder: EncoderConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse, the encoder
    /// name is unknown, or the planner tunables fail validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let planner = PlannerConfig {
            min_exercises_per_day: parse_env(
                env_vars::MIN_EXERCISES_PER_DAY,
                defaults::MIN_EXERCISES_PER_DAY,
            )?,
            rank_top_k: parse_env(env_vars::RANK_TOP_K, defaults::RANK_TOP_K)?,
            fallback_limit: parse_env(env_vars::FALLBACK_LIMIT, defaults::FALLBACK_LIMIT)?,
            seed: parse_optional_env(env_vars::PLAN_SEED)?,
        };
        planner.validate()?;

        let config = Self {
            http_port: parse_env(env_vars::HTTP_PORT, server::DEFAULT_HTTP_PORT)?,
            database_url: env::var(env_vars::DATABASE_URL)
                .unwrap_or_else(|_| server::DEFAULT_DATABASE_URL.to_owned()),
            environment: env::var(env_vars::ENVIRONMENT)
                .map(|v| Environment::from_str_or_default(&v))
                .unwrap_or_default(),
            planner,
            encoder: encoder_from_env()?,
        };

        if config.planner.seed.is_some() && config.environment.is_production() {
            warn!("{} is set in production; every plan is identical", env_vars::PLAN_SEED);
        }
        Ok(config)
    }

    /// One-line description for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Kinetic planner configuration: port={} database={} environment={} encoder={} \
             min_per_day={} top_k={} fallback_limit={} seed={}",
            self.http_port,
            self.database_url,
            self.environment,
            self.encoder,
            self.planner.min_exercises_per_day,
            self.planner.rank_top_k,
            self.planner.fallback_limit,
            self.planner
                .seed
                .map_or_else(|| "random".to_owned(), |seed| seed.to_string()),
        )
    }
}

fn encoder_from_env() -> Result<EncoderConfig> {
    let kind = env::var(env_vars::ENCODER).unwrap_or_else(|_| "hashing".to_owned());
    match kind.trim().to_lowercase().as_str() {
        "hashing" => {
            let dimension = parse_env(env_vars::EMBEDDING_DIMENSION, defaults::EMBEDDING_DIMENSION)?;
            if dimension == 0 {
                bail!("{} must be at least 1", env_vars::EMBEDDING_DIMENSION);
            }
            Ok(EncoderConfig::Hashing { dimension })
        }
        "disabled" | "none" => Ok(EncoderConfig::Disabled),
        other => bail!(
            "Invalid {} value '{other}': expected 'hashing' or 'disabled'",
            env_vars::ENCODER
        ),
    }
}

/// Parse `key` as `T`, using `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    parse_optional_env(key).map(|value| value.unwrap_or(default))
}

/// Parse `key` as `T` when set; blank values count as unset
fn parse_optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid {key} value '{raw}'")),
        _ => Ok(None),
    }
}
