//! # Parking Allocator
//!
//! A concurrent slot-allocation engine for multi-level parking lots.
//!
//! Every level is a fixed row of physically adjacent slots. Vehicles need a
//! contiguous run of free slots whose length depends on their kind, and the
//! engine hands out the first long-enough run it finds, lowest level first.
//!
//! ## Core Problem Solved
//!
//! Park and leave requests arrive from many threads at once (gates, kiosks,
//! attendant apps). Two requests must never be handed the same slot, and a
//! vehicle must get exactly the run its kind needs, on a single level.
//!
//! - **Per-level locking**: each level has its own `parking_lot::Mutex`, so
//!   traffic on different floors never contends
//! - **Atomic search-and-reserve**: the first-fit scan and the reservation
//!   run inside one critical section
//! - **Lock-free pre-filter**: per-level free counters let park skip levels
//!   that cannot fit the vehicle without locking them
//! - **Idempotent leave**: leaving twice is harmless
//!
//! ## Size classes
//!
//! | Kind       | Class      | Contiguous slots |
//! |------------|------------|------------------|
//! | Motorcycle | Motorcycle | 1                |
//! | Car        | Compact    | 3                |
//! | Bus        | Large      | 5                |
//!
//! ## Example
//!
//! ```
//! use parking_allocator::core::{AllocationEngine, ParkingError, VehicleKind};
//!
//! let engine = AllocationEngine::new(1, 10)?;
//! assert_eq!(engine.park(VehicleKind::Motorcycle, "M-1")?, vec![0]);
//! assert_eq!(engine.park(VehicleKind::Car, "C-1")?, vec![1, 2, 3]);
//! assert_eq!(engine.park(VehicleKind::Bus, "B-1")?, vec![4, 5, 6, 7, 8]);
//!
//! assert!(engine.park(VehicleKind::Car, "C-2").is_err());
//! assert!(engine.leave("C-1"));
//! assert_eq!(engine.park(VehicleKind::Car, "C-2")?, vec![1, 2, 3]);
//! # Ok::<(), ParkingError>(())
//! ```
//!
//! For complete scenarios, see `tests/engine_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Slot model, level search, and the allocation engine.
pub mod core;
/// Configuration models for engine dimensions.
pub mod config;
/// Builders to construct the engine from configuration.
pub mod builders;
/// Runtime adapters for async callers.
pub mod runtime;
/// Shared utilities.
pub mod util;

pub use crate::core::{AllocationEngine, ParkingError, SlotId, Vehicle, VehicleId, VehicleKind};
