//! Builder for [`AllocationEngine`].

use crate::config::EngineConfig;
use crate::core::{AllocationEngine, AppResult, AuditSink, ParkingError};

/// Collects dimensions and an optional audit sink, then builds an engine.
pub struct EngineBuilder {
    config: EngineConfig,
    audit: Option<Box<dyn AuditSink>>,
}

impl EngineBuilder {
    /// Start from explicit configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            audit: None,
        }
    }

    /// Start from `PARKING_LEVEL_COUNT` / `PARKING_SLOTS_PER_LEVEL`.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(EngineConfig::from_env()?))
    }

    /// Override the number of levels.
    #[must_use]
    pub fn level_count(mut self, level_count: usize) -> Self {
        self.config.level_count = level_count;
        self
    }

    /// Override the slots per level.
    #[must_use]
    pub fn slots_per_level(mut self, slots_per_level: usize) -> Self {
        self.config.slots_per_level = slots_per_level;
        self
    }

    /// Attach an audit sink to the built engine.
    #[must_use]
    pub fn audit(mut self, sink: Box<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Configuration the engine will be built with.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate and build.
    pub fn build(self) -> Result<AllocationEngine, ParkingError> {
        let engine = AllocationEngine::from_config(&self.config)?;
        Ok(match self.audit {
            Some(sink) => engine.with_audit(sink),
            None => engine,
        })
    }
}

/// Build an engine straight from configuration.
pub fn build_engine(cfg: &EngineConfig) -> Result<AllocationEngine, ParkingError> {
    EngineBuilder::new(*cfg).build()
}
