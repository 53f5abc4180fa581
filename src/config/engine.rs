//! Engine dimension configuration.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{AppResult, ParkingError};

/// Environment variable holding the number of levels.
pub const ENV_LEVEL_COUNT: &str = "PARKING_LEVEL_COUNT";
/// Environment variable holding the slots per level.
pub const ENV_SLOTS_PER_LEVEL: &str = "PARKING_SLOTS_PER_LEVEL";

/// Lot dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of levels (floors).
    pub level_count: usize,
    /// Slots on every level.
    pub slots_per_level: usize,
}

impl EngineConfig {
    /// Create a configuration without validating it.
    pub const fn new(level_count: usize, slots_per_level: usize) -> Self {
        Self {
            level_count,
            slots_per_level,
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ParkingError> {
        if self.level_count == 0 {
            return Err(ParkingError::InvalidConfig(
                "level_count must be greater than 0".into(),
            ));
        }
        if self.slots_per_level == 0 {
            return Err(ParkingError::InvalidConfig(
                "slots_per_level must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, ParkingError> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| ParkingError::InvalidConfig(format!("parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from the environment, reading a `.env` file first if present.
    ///
    /// A missing `.env` is fine; a malformed one is an error.
    pub fn from_env() -> AppResult<Self> {
        tolerate_missing(dotenvy::dotenv().map(drop)).context("failed to load .env")?;
        Self::from_process_env()
    }

    /// Like [`from_env`](Self::from_env) but reads the given dotenv file.
    pub fn from_env_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        tolerate_missing(dotenvy::from_path(path))
            .with_context(|| format!("failed to load {}", path.display()))?;
        Self::from_process_env()
    }

    fn from_process_env() -> AppResult<Self> {
        let level_count = read_env_usize(ENV_LEVEL_COUNT)?;
        let slots_per_level = read_env_usize(ENV_SLOTS_PER_LEVEL)?;
        let cfg = Self::new(level_count, slots_per_level);
        cfg.validate()?;
        Ok(cfg)
    }
}

fn tolerate_missing(result: Result<(), dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match result {
        Err(e) if e.not_found() => Ok(()),
        other => other,
    }
}

fn read_env_usize(key: &str) -> AppResult<usize> {
    let raw = std::env::var(key).with_context(|| format!("{key} is not set"))?;
    raw.trim()
        .parse()
        .with_context(|| format!("{key}={raw:?} is not a non-negative integer"))
}
