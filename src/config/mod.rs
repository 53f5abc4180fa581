//! Configuration models for the allocation engine.

pub mod engine;

pub use engine::{EngineConfig, ENV_LEVEL_COUNT, ENV_SLOTS_PER_LEVEL};
