//! Tests for builder modules

use parking_allocator::builders::{build_engine, EngineBuilder};
use parking_allocator::config::EngineConfig;
use parking_allocator::core::{InMemoryAuditSink, VehicleKind};

#[test]
fn test_engine_builder_defaults() {
    let builder = EngineBuilder::new(EngineConfig::new(2, 10));
    assert_eq!(builder.config().level_count, 2);
    assert_eq!(builder.config().slots_per_level, 10);

    let engine = builder.build().unwrap();
    assert_eq!(engine.capacity(), 20);
    assert_eq!(engine.level_count(), 2);
}

#[test]
fn test_engine_builder_overrides() {
    let engine = EngineBuilder::new(EngineConfig::new(1, 1))
        .level_count(3)
        .slots_per_level(7)
        .audit(Box::new(InMemoryAuditSink::new(8)))
        .build()
        .unwrap();
    assert_eq!(engine.capacity(), 21);
    assert_eq!(engine.park(VehicleKind::Bus, "b1").unwrap(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_engine_builder_rejects_invalid() {
    assert!(EngineBuilder::new(EngineConfig::new(0, 5)).build().is_err());
    assert!(build_engine(&EngineConfig::new(5, 0)).is_err());
}
