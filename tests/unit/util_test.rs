//! Tests for utility functions

use parking_allocator::core::{required_run, SizeClass, VehicleKind};
use parking_allocator::util::{init_tracing, now_ms};

#[test]
fn test_now_ms_is_monotonic_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(a > 0);
    assert!(b >= a);
}

#[test]
fn test_init_tracing_twice() {
    init_tracing();
    init_tracing();
}

#[test]
fn test_size_class_lookup() {
    assert_eq!(SizeClass::Motorcycle.min_run(), 1);
    assert_eq!(SizeClass::Compact.min_run(), 3);
    assert_eq!(SizeClass::Large.min_run(), 5);
    for kind in VehicleKind::ALL {
        assert_eq!(required_run(kind), kind.size_class().min_run());
    }
}
