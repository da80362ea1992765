//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod device_registry;
mod snapshot_data_handler;

pub use device_registry::InMemoryDeviceRegistry;
pub use snapshot_data_handler::{
    BATCH_SIZE, FileSnapshotSource, SnapshotDataHandler, SnapshotSource, SnapshotSourceError,
};
