//! Tokio facade over the blocking engine.
//!
//! Level locks are `parking_lot` mutexes, so every engine call runs on the
//! blocking pool instead of an async worker thread.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::core::{AllocationEngine, ParkingError, SlotId, VehicleId, VehicleKind};

/// Failures of the async facade.
#[derive(Debug, Error)]
pub enum AsyncParkError {
    /// The engine rejected the request.
    #[error(transparent)]
    Parking(#[from] ParkingError),
    /// The caller-imposed timeout elapsed before park returned.
    #[error("park timed out after {0:?}")]
    Timeout(Duration),
    /// The blocking task panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Cloneable async handle to a shared [`AllocationEngine`].
#[derive(Debug, Clone)]
pub struct AsyncEngine {
    inner: Arc<AllocationEngine>,
}

impl AsyncEngine {
    /// Wrap an engine.
    pub fn new(engine: AllocationEngine) -> Self {
        Self {
            inner: Arc::new(engine),
        }
    }

    /// Wrap an engine that is already shared.
    pub const fn from_shared(inner: Arc<AllocationEngine>) -> Self {
        Self { inner }
    }

    /// Underlying engine for synchronous inspection.
    pub fn engine(&self) -> &Arc<AllocationEngine> {
        &self.inner
    }

    /// Park on the blocking pool.
    pub async fn park(
        &self,
        kind: VehicleKind,
        id: impl Into<VehicleId>,
    ) -> Result<Vec<SlotId>, AsyncParkError> {
        let engine = Arc::clone(&self.inner);
        let id = id.into();
        let slots = tokio::task::spawn_blocking(move || engine.park(kind, id)).await??;
        Ok(slots)
    }

    /// Park, giving up after `timeout`.
    ///
    /// If the timeout fires after the blocking task already reserved slots,
    /// the vehicle stays parked; check [`AllocationEngine::vehicle`] or call
    /// [`leave`](Self::leave) to undo it.
    pub async fn park_with_timeout(
        &self,
        kind: VehicleKind,
        id: impl Into<VehicleId>,
        timeout: Duration,
    ) -> Result<Vec<SlotId>, AsyncParkError> {
        tokio::time::timeout(timeout, self.park(kind, id))
            .await
            .map_err(|_| AsyncParkError::Timeout(timeout))?
    }

    /// Leave on the blocking pool. Returns whether the vehicle was parked.
    pub async fn leave(&self, id: impl Into<VehicleId>) -> Result<bool, AsyncParkError> {
        let engine = Arc::clone(&self.inner);
        let id = id.into();
        Ok(tokio::task::spawn_blocking(move || engine.leave(&id)).await?)
    }

    /// Availability probe on the blocking pool.
    pub async fn has_available_spot(&self, kind: VehicleKind) -> Result<bool, AsyncParkError> {
        let engine = Arc::clone(&self.inner);
        Ok(tokio::task::spawn_blocking(move || engine.has_available_spot(kind)).await?)
    }
}
