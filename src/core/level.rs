//! One floor of the lot: an ordered row of physically adjacent slots.
//!
//! [`SlotRow`] is the unsynchronised slot array and owns the first-fit
//! search. [`Level`] puts the row behind its own `parking_lot::Mutex` so that
//! search and reserve always run inside one critical section, and keeps a
//! lock-free free-slot counter that the engine reads as a cheap pre-filter.

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::core::slot::{Slot, SlotId};
use crate::core::vehicle::VehicleId;

/// Fixed-length row of slots. Index `i` and `i + 1` are physically adjacent.
#[derive(Debug, Clone)]
pub struct SlotRow {
    first_id: SlotId,
    slots: Vec<Slot>,
}

impl SlotRow {
    /// Create a row of free slots numbered from `first_id`.
    pub fn new(level_index: usize, first_id: SlotId, len: usize) -> Self {
        let slots = (0..len)
            .map(|pos| Slot::new(first_id + pos, level_index, pos))
            .collect();
        Self { first_id, slots }
    }

    /// Number of slots in the row.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the row has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in positional order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of currently free slots.
    pub fn free_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_occupied()).count()
    }

    /// First-fit search, left to right.
    ///
    /// Returns the first `length` positions of the leftmost free run that is
    /// at least `length` long. The tail of an overlong run stays free.
    pub fn find_free_run(&self, length: usize) -> Option<Range<usize>> {
        if length == 0 || length > self.slots.len() {
            return None;
        }
        let mut run_start = 0;
        let mut run_len = 0;
        for (pos, slot) in self.slots.iter().enumerate() {
            if slot.is_occupied() {
                run_len = 0;
                continue;
            }
            if run_len == 0 {
                run_start = pos;
            }
            run_len += 1;
            if run_len == length {
                return Some(run_start..run_start + length);
            }
        }
        None
    }

    /// Mark `[start, start + length)` as held by `occupant`.
    ///
    /// Does not re-check the range: callers must have found it with
    /// [`find_free_run`](Self::find_free_run) under the same lock.
    pub fn reserve(&mut self, start: usize, length: usize, occupant: &VehicleId) -> Vec<SlotId> {
        self.slots[start..start + length]
            .iter_mut()
            .map(|slot| {
                debug_assert!(!slot.is_occupied(), "reserving occupied slot {}", slot.id());
                slot.occupy(occupant.clone());
                slot.id()
            })
            .collect()
    }

    /// Free the given slots. Already-free slots and ids outside this row are
    /// ignored. Returns how many slots actually changed state.
    pub fn release(&mut self, ids: &[SlotId]) -> usize {
        let mut freed = 0;
        for &id in ids {
            if let Some(pos) = self.position_of(id) {
                if self.slots[pos].vacate() {
                    freed += 1;
                }
            }
        }
        freed
    }

    /// Slot by global id, if it belongs to this row.
    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.position_of(id).map(|pos| &self.slots[pos])
    }

    fn position_of(&self, id: SlotId) -> Option<usize> {
        id.checked_sub(self.first_id)
            .filter(|&pos| pos < self.slots.len())
    }
}

/// A lockable level.
#[derive(Debug)]
pub struct Level {
    index: usize,
    capacity: usize,
    row: Mutex<SlotRow>,
    /// Free slots, updated only while `row` is locked; read lock-free.
    free: AtomicUsize,
}

impl Level {
    /// Create a level of `capacity` free slots numbered from `first_id`.
    pub fn new(index: usize, first_id: SlotId, capacity: usize) -> Self {
        Self {
            index,
            capacity,
            row: Mutex::new(SlotRow::new(index, first_id, capacity)),
            free: AtomicUsize::new(capacity),
        }
    }

    /// Level index (0 is preferred first).
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Total slots on this level.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lock-free free-slot count. May be stale by the time it is used.
    pub fn free_hint(&self) -> usize {
        self.free.load(Ordering::Acquire)
    }

    /// Cheap pre-filter: could this level possibly host a run of `length`?
    pub fn may_fit(&self, length: usize) -> bool {
        length <= self.capacity && self.free_hint() >= length
    }

    /// Search and reserve a run of `length` slots in one critical section.
    pub fn try_reserve(&self, length: usize, occupant: &VehicleId) -> Option<Vec<SlotId>> {
        let mut row = self.row.lock();
        let run = row.find_free_run(length)?;
        let ids = row.reserve(run.start, run.len(), occupant);
        self.free.fetch_sub(ids.len(), Ordering::AcqRel);
        drop(row);
        tracing::debug!(level = self.index, start = run.start, length, "reserved run");
        Some(ids)
    }

    /// Whether a run of `length` currently exists. Reserves nothing.
    pub fn has_free_run(&self, length: usize) -> bool {
        self.may_fit(length) && self.row.lock().find_free_run(length).is_some()
    }

    /// Free the given slots; returns how many changed state.
    pub fn release(&self, ids: &[SlotId]) -> usize {
        let mut row = self.row.lock();
        let freed = row.release(ids);
        self.free.fetch_add(freed, Ordering::AcqRel);
        freed
    }

    /// Current occupant of a slot on this level.
    pub fn occupant(&self, id: SlotId) -> Option<VehicleId> {
        self.row.lock().get(id).and_then(|s| s.occupant().cloned())
    }

    /// Occupancy bitmap in positional order.
    pub fn occupancy(&self) -> Vec<bool> {
        self.row.lock().slots().iter().map(Slot::is_occupied).collect()
    }
}
