//! Data handler port
//!
//! Defines how entities subscribe to remote data classes and read the latest
//! snapshot of each.

use std::sync::Arc;

use async_trait::async_trait;
use domain::{DataClass, PublicSnapshot, StationSnapshot};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the component fetching and caching vendor data
///
/// Registrations are reference counted per entry name. The first
/// registration of an entry fetches it; the last unregistration drops it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DataHandlerPort: Send + Sync {
    /// Subscribe to a data class, fetching it if nobody else did
    async fn register_data_class(&self, data_class: &DataClass) -> Result<(), ApplicationError>;

    /// Release one subscription of an entry
    async fn unregister_data_class(&self, entry_name: &str);

    /// Current snapshot of a station or Home Coach entry
    fn station_snapshot(&self, entry_name: &str) -> Option<Arc<dyn StationSnapshot>>;

    /// Current snapshot of a public area entry
    fn public_snapshot(&self, entry_name: &str) -> Option<Arc<dyn PublicSnapshot>>;
}
