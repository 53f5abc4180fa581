//! Slot model, level search, and the allocation engine.

pub mod audit;
pub mod engine;
pub mod error;
pub mod level;
pub mod slot;
pub mod vehicle;

pub use audit::{
    build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink, TracingAuditSink,
};
pub use engine::{AllocationEngine, EngineSnapshot, LevelSnapshot};
pub use error::{AppResult, ParkingError};
pub use level::{Level, SlotRow};
pub use slot::{Slot, SlotId};
pub use vehicle::{required_run, SizeClass, Vehicle, VehicleId, VehicleKind};
