//! Runtime adapters for async callers.

#[cfg(feature = "tokio-runtime")]
pub mod tokio_adapter;

#[cfg(feature = "tokio-runtime")]
pub use tokio_adapter::AsyncEngine;
