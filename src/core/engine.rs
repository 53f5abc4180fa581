//! Allocation engine: cross-level first-fit search with per-level locking.
//!
//! Each [`Level`] is locked independently. Park reads the lock-free free-slot
//! counters as a pre-filter, then searches and reserves on a candidate level
//! inside that level's critical section. Runs never span levels, so no
//! global lock is needed for slot state. The vehicle registry has its own
//! mutex and is never held while a level lock is taken.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::core::audit::{build_audit_event, AuditAction, AuditSink};
use crate::core::error::ParkingError;
use crate::core::level::Level;
use crate::core::slot::SlotId;
use crate::core::vehicle::{Vehicle, VehicleId, VehicleKind};

/// Extra full passes Park may make after a pass where a level passed the
/// pre-filter but yielded no run under its lock.
const MAX_RESCANS: usize = 1;

/// Occupancy of one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// Level index.
    pub index: usize,
    /// Occupied flag per position.
    pub occupied: Vec<bool>,
}

/// Point-in-time occupancy bitmap of the whole engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Slots per level.
    pub slots_per_level: usize,
    /// Per-level occupancy, lowest level first.
    pub levels: Vec<LevelSnapshot>,
}

/// Owns every level and the registry of parked vehicles.
pub struct AllocationEngine {
    levels: Vec<Level>,
    slots_per_level: usize,
    /// Parked vehicles only; an entry is removed on leave.
    vehicles: Mutex<HashMap<VehicleId, Vehicle>>,
    audit: Option<Mutex<Box<dyn AuditSink>>>,
}

impl AllocationEngine {
    /// Pre-allocate `level_count × slots_per_level` free slots with
    /// sequential global ids.
    pub fn new(level_count: usize, slots_per_level: usize) -> Result<Self, ParkingError> {
        if level_count == 0 {
            return Err(ParkingError::InvalidConfig(
                "level_count must be greater than 0".into(),
            ));
        }
        if slots_per_level == 0 {
            return Err(ParkingError::InvalidConfig(
                "slots_per_level must be greater than 0".into(),
            ));
        }
        if level_count.checked_mul(slots_per_level).is_none() {
            return Err(ParkingError::InvalidConfig(format!(
                "{level_count} levels of {slots_per_level} slots overflows slot ids"
            )));
        }

        let levels = (0..level_count)
            .map(|index| Level::new(index, index * slots_per_level, slots_per_level))
            .collect();
        tracing::info!(level_count, slots_per_level, "allocation engine initialized");

        Ok(Self {
            levels,
            slots_per_level,
            vehicles: Mutex::new(HashMap::new()),
            audit: None,
        })
    }

    /// Build an engine from validated configuration.
    pub fn from_config(cfg: &EngineConfig) -> Result<Self, ParkingError> {
        cfg.validate()?;
        Self::new(cfg.level_count, cfg.slots_per_level)
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Mutex::new(audit));
        self
    }

    /// Park a vehicle in the first contiguous run long enough for its kind.
    ///
    /// Levels are visited in ascending index order. Parking an id that is
    /// already parked as the same kind reserves nothing and returns its
    /// current slots.
    ///
    /// # Errors
    ///
    /// [`ParkingError::NoAvailableSpot`] if no level holds a long-enough
    /// free run. [`ParkingError::KindMismatch`] if the id is already parked
    /// as a different kind. No slot is reserved in either case.
    pub fn park(
        &self,
        kind: VehicleKind,
        id: impl Into<VehicleId>,
    ) -> Result<Vec<SlotId>, ParkingError> {
        let id = id.into();
        if let Some(existing) = self.vehicle(&id) {
            tracing::warn!(vehicle = %id, "park requested for vehicle already parked");
            return Self::reuse_assignment(&existing, kind);
        }

        let required = kind.required_run();
        let Some(slots) = self.search_and_reserve(required, &id) else {
            tracing::warn!(vehicle = %id, %kind, required, "no available spot");
            self.record_audit(&id, kind, AuditAction::Reject, Vec::new());
            return Err(ParkingError::NoAvailableSpot { kind, required });
        };

        let mut vehicles = self.vehicles.lock();
        if let Some(winner) = vehicles.get(&id) {
            // A concurrent park for the same id registered first.
            let outcome = Self::reuse_assignment(winner, kind);
            drop(vehicles);
            self.release_slots(&slots);
            tracing::warn!(vehicle = %id, "concurrent park for same vehicle; keeping first");
            return outcome;
        }
        let mut record = Vehicle::new(id.clone(), kind);
        record.assign(slots.clone());
        vehicles.insert(id.clone(), record);
        drop(vehicles);

        tracing::info!(vehicle = %id, %kind, ?slots, "vehicle parked");
        self.record_audit(&id, kind, AuditAction::Park, slots.clone());
        Ok(slots)
    }

    /// Park using a caller-held record, storing the assignment in it.
    ///
    /// # Errors
    ///
    /// Same as [`park`](Self::park).
    pub fn park_vehicle<'a>(&self, vehicle: &'a mut Vehicle) -> Result<&'a [SlotId], ParkingError> {
        if !vehicle.is_parked() {
            let slots = self.park(vehicle.kind(), vehicle.id())?;
            vehicle.assign(slots);
        }
        Ok(vehicle.assigned_slots())
    }

    /// Release every slot held by `id`.
    ///
    /// Returns `false` (and changes nothing) if the vehicle is not parked,
    /// so duplicate leaves are harmless.
    pub fn leave(&self, id: &str) -> bool {
        let Some(mut record) = self.vehicles.lock().remove(id) else {
            tracing::debug!(vehicle = %id, "leave for vehicle not parked");
            return false;
        };
        let slots = record.take_slots();
        self.release_slots(&slots);

        tracing::info!(vehicle = %id, kind = %record.kind(), ?slots, "vehicle left");
        self.record_audit(id, record.kind(), AuditAction::Leave, slots);
        true
    }

    /// Leave using a caller-held record and clear its assignment.
    pub fn leave_vehicle(&self, vehicle: &mut Vehicle) -> bool {
        if !vehicle.is_parked() {
            return false;
        }
        vehicle.take_slots();
        self.leave(vehicle.id())
    }

    /// Point-in-time probe: does some level hold a run for `kind` right now?
    ///
    /// Reserves nothing. A later park may still fail if another caller takes
    /// the space first.
    pub fn has_available_spot(&self, kind: VehicleKind) -> bool {
        let required = kind.required_run();
        self.levels.iter().any(|level| level.has_free_run(required))
    }

    /// Vehicle holding `slot`, if any.
    pub fn occupant(&self, slot: SlotId) -> Option<VehicleId> {
        self.levels
            .get(slot / self.slots_per_level)
            .and_then(|level| level.occupant(slot))
    }

    /// Snapshot of a parked vehicle's record.
    pub fn vehicle(&self, id: &str) -> Option<Vehicle> {
        self.vehicles.lock().get(id).cloned()
    }

    /// Number of vehicles currently parked.
    pub fn parked_count(&self) -> usize {
        self.vehicles.lock().len()
    }

    /// Free slots across all levels, from the lock-free counters.
    pub fn free_slots(&self) -> usize {
        self.levels.iter().map(Level::free_hint).sum()
    }

    /// Total slots in the engine.
    pub fn capacity(&self) -> usize {
        self.levels.len() * self.slots_per_level
    }

    /// Number of levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Slots on each level.
    pub const fn slots_per_level(&self) -> usize {
        self.slots_per_level
    }

    /// Occupancy bitmap, one level at a time (levels are not frozen together).
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            slots_per_level: self.slots_per_level,
            levels: self
                .levels
                .iter()
                .map(|level| LevelSnapshot {
                    index: level.index(),
                    occupied: level.occupancy(),
                })
                .collect(),
        }
    }

    /// Existing slots of a parked record, only if they fit `kind`.
    fn reuse_assignment(existing: &Vehicle, kind: VehicleKind) -> Result<Vec<SlotId>, ParkingError> {
        if existing.kind() != kind {
            return Err(ParkingError::KindMismatch {
                id: existing.id().to_string(),
                parked: existing.kind(),
                requested: kind,
            });
        }
        Ok(existing.assigned_slots().to_vec())
    }

    fn search_and_reserve(&self, required: usize, id: &VehicleId) -> Option<Vec<SlotId>> {
        for pass in 0..=MAX_RESCANS {
            let mut contested = false;
            for level in &self.levels {
                if !level.may_fit(required) {
                    continue;
                }
                if let Some(slots) = level.try_reserve(required, id) {
                    return Some(slots);
                }
                contested = true;
                tracing::debug!(level = level.index(), required, pass, "level had no run under lock");
            }
            if !contested {
                break;
            }
        }
        None
    }

    fn release_slots(&self, slots: &[SlotId]) {
        let per_level = self.slots_per_level;
        for group in slots.chunk_by(|a, b| a / per_level == b / per_level) {
            if let Some(level) = self.levels.get(group[0] / per_level) {
                level.release(group);
            }
        }
    }

    fn record_audit(&self, id: &str, kind: VehicleKind, action: AuditAction, slots: Vec<SlotId>) {
        if let Some(audit) = self.audit.as_ref() {
            audit.lock().record(build_audit_event(id, kind, action, slots));
        }
    }
}

impl std::fmt::Debug for AllocationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllocationEngine")
            .field("level_count", &self.levels.len())
            .field("slots_per_level", &self.slots_per_level)
            .field("free_slots", &self.free_slots())
            .field("audit", &self.audit.is_some())
            .finish_non_exhaustive()
    }
}
