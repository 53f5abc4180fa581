//! Vehicle kinds, size classes, and the parking record.
//!
//! Size classes are a property of the vehicle kind, not of the slot: every
//! slot is a fungible unit of space and a size class only says how many
//! adjacent units a vehicle needs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::slot::SlotId;

/// Caller-supplied vehicle identifier (registration plate, ticket, ...).
pub type VehicleId = String;

/// Kind of vehicle requesting a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    /// Two-wheeler.
    Motorcycle,
    /// Passenger car.
    Car,
    /// Bus or coach.
    Bus,
}

impl VehicleKind {
    /// All kinds, smallest footprint first.
    pub const ALL: [Self; 3] = [Self::Motorcycle, Self::Car, Self::Bus];

    /// Size class this kind parks in.
    pub const fn size_class(self) -> SizeClass {
        match self {
            Self::Motorcycle => SizeClass::Motorcycle,
            Self::Car => SizeClass::Compact,
            Self::Bus => SizeClass::Large,
        }
    }

    /// Number of contiguous free slots this kind consumes.
    pub const fn required_run(self) -> usize {
        self.size_class().min_run()
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Motorcycle => "motorcycle",
            Self::Car => "car",
            Self::Bus => "bus",
        };
        f.write_str(name)
    }
}

/// Minimum contiguous run length classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// One slot.
    Motorcycle,
    /// Three adjacent slots.
    Compact,
    /// Five adjacent slots.
    Large,
}

impl SizeClass {
    /// Minimum run of contiguous free slots required.
    pub const fn min_run(self) -> usize {
        match self {
            Self::Motorcycle => 1,
            Self::Compact => 3,
            Self::Large => 5,
        }
    }
}

/// Lookup `kind -> required run length`.
pub const fn required_run(kind: VehicleKind) -> usize {
    kind.required_run()
}

/// Parking record for one vehicle.
///
/// `assigned_slots` is filled once by a successful park and cleared once by
/// the matching leave. A record with assigned slots is parked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    kind: VehicleKind,
    assigned_slots: Vec<SlotId>,
}

impl Vehicle {
    /// Create an unparked record.
    pub fn new(id: impl Into<VehicleId>, kind: VehicleKind) -> Self {
        Self {
            id: id.into(),
            kind,
            assigned_slots: Vec::new(),
        }
    }

    /// Vehicle identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Vehicle kind.
    pub const fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Contiguous run length this vehicle needs.
    pub const fn required_run(&self) -> usize {
        self.kind.required_run()
    }

    /// Slots currently held, in ascending order. Empty when not parked.
    pub fn assigned_slots(&self) -> &[SlotId] {
        &self.assigned_slots
    }

    /// Whether the vehicle currently holds slots.
    pub fn is_parked(&self) -> bool {
        !self.assigned_slots.is_empty()
    }

    pub(crate) fn assign(&mut self, slots: Vec<SlotId>) {
        debug_assert!(self.assigned_slots.is_empty(), "vehicle assigned twice");
        self.assigned_slots = slots;
    }

    pub(crate) fn take_slots(&mut self) -> Vec<SlotId> {
        std::mem::take(&mut self.assigned_slots)
    }
}
