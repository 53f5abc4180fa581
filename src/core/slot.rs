//! Single unit of physical parking space.

use serde::{Deserialize, Serialize};

use crate::core::vehicle::VehicleId;

/// Globally unique slot identifier, stable for the engine's lifetime.
///
/// Computed as `level_index * slots_per_level + position_in_level`.
pub type SlotId = usize;

/// A slot and its current occupant.
///
/// `occupant` is `None` exactly when the slot is free; occupancy is derived
/// from it rather than stored twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    id: SlotId,
    level_index: usize,
    position: usize,
    occupant: Option<VehicleId>,
}

impl Slot {
    /// Create a free slot.
    pub const fn new(id: SlotId, level_index: usize, position: usize) -> Self {
        Self {
            id,
            level_index,
            position,
            occupant: None,
        }
    }

    /// Global identifier.
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// Index of the owning level.
    pub const fn level_index(&self) -> usize {
        self.level_index
    }

    /// Position inside the owning level.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether a vehicle holds this slot.
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Vehicle currently holding this slot.
    pub fn occupant(&self) -> Option<&VehicleId> {
        self.occupant.as_ref()
    }

    pub(crate) fn occupy(&mut self, vehicle: VehicleId) {
        self.occupant = Some(vehicle);
    }

    /// Returns true if the slot was occupied before the call.
    pub(crate) fn vacate(&mut self) -> bool {
        self.occupant.take().is_some()
    }
}
