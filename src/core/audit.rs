//! Allocation audit trail.
//!
//! Records park, leave, and rejection events so operators can reconstruct
//! who held which slots. Sinks are synchronous and owned by the engine.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::slot::SlotId;
use crate::core::vehicle::{VehicleId, VehicleKind};
use crate::util::clock::now_ms;

/// What happened to a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Slots were reserved.
    Park,
    /// Slots were released.
    Leave,
    /// Park failed with no available spot.
    Reject,
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Vehicle the event concerns.
    pub vehicle_id: VehicleId,
    /// Vehicle kind.
    pub kind: VehicleKind,
    /// Action taken.
    pub action: AuditAction,
    /// Slots reserved or released; empty on reject.
    pub slots: Vec<SlotId>,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Sink that forwards every event to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&mut self, event: AuditEvent) {
        tracing::info!(
            target: "parking_allocator::audit",
            event_id = %event.event_id,
            vehicle = %event.vehicle_id,
            kind = %event.kind,
            action = ?event.action,
            slots = ?event.slots,
            "audit"
        );
    }
}

/// Helper to build an audit event with a fresh id and timestamp.
pub fn build_audit_event(
    vehicle_id: impl Into<VehicleId>,
    kind: VehicleKind,
    action: AuditAction,
    slots: Vec<SlotId>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        vehicle_id: vehicle_id.into(),
        kind,
        action,
        slots,
        created_at_ms: now_ms(),
    }
}
