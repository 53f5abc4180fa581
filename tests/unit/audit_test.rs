//! Tests for audit sink

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use parking_allocator::core::{
    build_audit_event, AuditAction, AuditSink, InMemoryAuditSink, TracingAuditSink, VehicleKind,
};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event("KA-01", VehicleKind::Car, AuditAction::Park, vec![1, 2, 3]);

    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].event_id, event.event_id);
    assert_eq!(events[0].vehicle_id, "KA-01");
    assert_eq!(events[0].action, AuditAction::Park);
    assert_eq!(events[0].slots, vec![1, 2, 3]);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event("v1", VehicleKind::Motorcycle, AuditAction::Park, vec![0]));
    sink.record(build_audit_event("v2", VehicleKind::Motorcycle, AuditAction::Park, vec![1]));
    sink.record(build_audit_event("v1", VehicleKind::Motorcycle, AuditAction::Leave, vec![0]));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].vehicle_id, "v2"); // First one popped
    assert_eq!(events[1].action, AuditAction::Leave);
}

#[test]
fn test_build_audit_event() {
    let a = build_audit_event("bus", VehicleKind::Bus, AuditAction::Reject, Vec::new());
    let b = build_audit_event("bus", VehicleKind::Bus, AuditAction::Reject, Vec::new());

    assert_ne!(a.event_id, b.event_id);
    assert_eq!(a.kind, VehicleKind::Bus);
    assert!(a.slots.is_empty());
    assert!(a.created_at_ms > 0);
}

#[test]
fn test_audit_event_serializes() {
    let event = build_audit_event("car", VehicleKind::Car, AuditAction::Leave, vec![4, 5, 6]);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["action"], "leave");
    assert_eq!(json["kind"], "car");
    assert_eq!(json["slots"], serde_json::json!([4, 5, 6]));
}

#[test]
fn test_zero_capacity_sink_keeps_nothing() {
    let mut sink = InMemoryAuditSink::new(0);
    sink.record(build_audit_event("v1", VehicleKind::Car, AuditAction::Park, vec![0, 1, 2]));
    assert!(sink.events().is_empty());
}

/// Writer collecting formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_tracing_sink_emits_event() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let mut sink = TracingAuditSink;
    tracing::subscriber::with_default(subscriber, || {
        sink.record(build_audit_event("MOTO-9", VehicleKind::Motorcycle, AuditAction::Park, vec![7]));
    });

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("audit"), "{output}");
    assert!(output.contains("MOTO-9"), "{output}");
    assert!(output.contains("Park"), "{output}");
}
