//! Error types for allocation engine operations.

use thiserror::Error;

use crate::core::vehicle::{VehicleId, VehicleKind};

/// Errors produced by the allocation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    /// No level holds a contiguous free run long enough for the vehicle.
    #[error("no available spot for {kind} (needs {required} contiguous slots)")]
    NoAvailableSpot {
        /// Kind of the rejected vehicle.
        kind: VehicleKind,
        /// Contiguous run length the vehicle required.
        required: usize,
    },
    /// The id is already parked as a different kind; its slots would not
    /// match the requested size class.
    #[error("vehicle {id} is parked as {parked}, not {requested}")]
    KindMismatch {
        /// Vehicle identifier.
        id: VehicleId,
        /// Kind the vehicle is parked as.
        parked: VehicleKind,
        /// Kind in the rejected request.
        requested: VehicleKind,
    },
    /// Engine dimensions or configuration values are invalid.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ParkingError {
    /// Whether the caller may retry later (the lot may free up).
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::NoAvailableSpot { .. })
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
