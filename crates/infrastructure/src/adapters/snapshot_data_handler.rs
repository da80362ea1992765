//! Snapshot data handler - Implements DataHandlerPort over stored responses
//!
//! Keeps one entry per registered data class. Each entry holds the last
//! parsed response and the time it is next due for a fetch.

use std::{
    collections::{HashMap, VecDeque},
    path::PathBuf,
    sync::Arc,
    time::Instant,
};

use application::{error::ApplicationError, ports::DataHandlerPort};
use async_trait::async_trait;
use domain::{DataClass, PublicSnapshot, StationSnapshot};
use integration_netatmo::{NetatmoError, Snapshot};
use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Maximum number of entries fetched by one poll
pub const BATCH_SIZE: usize = 3;

#[derive(Debug, Error)]
pub enum SnapshotSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] NetatmoError),

    #[error("No snapshot stored for {0}")]
    NotFound(String),
}

/// Where raw response bodies come from
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Raw response body for a data class
    async fn fetch(&self, data_class: &DataClass) -> Result<String, SnapshotSourceError>;
}

/// Reads `<dir>/<entry name>.json`
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    dir: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File holding the response of a data class
    pub fn path_for(&self, data_class: &DataClass) -> PathBuf {
        self.dir.join(format!("{}.json", data_class.entry_name()))
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn fetch(&self, data_class: &DataClass) -> Result<String, SnapshotSourceError> {
        let path = self.path_for(data_class);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SnapshotSourceError::NotFound(path.display().to_string()))
            },
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug)]
struct Entry {
    data_class: DataClass,
    subscribers: usize,
    snapshot: Option<Snapshot>,
    next_scan: Instant,
}

#[derive(Debug, Default)]
struct Registry {
    entries: HashMap<String, Entry>,
    queue: VecDeque<String>,
}

/// Reference counted data class registrations over a [`SnapshotSource`]
pub struct SnapshotDataHandler {
    source: Arc<dyn SnapshotSource>,
    registry: RwLock<Registry>,
}

impl std::fmt::Debug for SnapshotDataHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotDataHandler")
            .field("entries", &self.registry.read().queue)
            .finish_non_exhaustive()
    }
}

impl SnapshotDataHandler {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            source,
            registry: RwLock::new(Registry::default()),
        }
    }

    /// Handler reading snapshots from a directory
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileSnapshotSource::new(dir)))
    }

    /// Number of registrations of an entry, 0 when not registered
    pub fn subscribers(&self, entry_name: &str) -> usize {
        self.registry
            .read()
            .entries
            .get(entry_name)
            .map_or(0, |e| e.subscribers)
    }

    /// Registered entry names, in polling order
    pub fn entry_names(&self) -> Vec<String> {
        self.registry.read().queue.iter().cloned().collect()
    }

    /// Fetch up to [`BATCH_SIZE`] due entries from the head of the queue
    ///
    /// The queue is rotated so the next poll looks at other entries.
    /// Returns the entries whose snapshot was replaced.
    #[instrument(skip(self, now))]
    pub async fn poll_due(&self, now: Instant) -> Vec<String> {
        let due: Vec<(String, DataClass)> = {
            let mut registry = self.registry.write();
            let Registry { entries, queue } = &mut *registry;
            let batch = BATCH_SIZE.min(queue.len());

            let due = queue
                .iter()
                .take(batch)
                .filter_map(|name| {
                    let entry = entries.get_mut(name)?;
                    if entry.next_scan > now {
                        return None;
                    }
                    entry.next_scan = now + entry.data_class.scan_interval();
                    Some((name.clone(), entry.data_class.clone()))
                })
                .collect();
            queue.rotate_left(batch);
            due
        };

        let mut updated = Vec::new();
        for (name, data_class) in due {
            if self.fetch(&name, &data_class).await {
                updated.push(name);
            }
        }
        updated
    }

    /// Fetch and store one entry; `true` when a new snapshot was stored
    async fn fetch(&self, entry_name: &str, data_class: &DataClass) -> bool {
        let parsed = match self.source.fetch(data_class).await {
            Ok(raw) => Snapshot::parse(data_class, &raw).map_err(SnapshotSourceError::from),
            Err(e) => Err(e),
        };

        match parsed {
            Ok(snapshot) => {
                let mut registry = self.registry.write();
                // Unregistered while fetching
                let Some(entry) = registry.entries.get_mut(entry_name) else {
                    return false;
                };
                entry.snapshot = Some(snapshot);
                debug!(entry = entry_name, "Snapshot updated");
                true
            },
            Err(e) => {
                debug!(entry = entry_name, error = %e, "Fetch failed, keeping previous snapshot");
                false
            },
        }
    }

    fn snapshot(&self, entry_name: &str) -> Option<Snapshot> {
        self.registry
            .read()
            .entries
            .get(entry_name)
            .and_then(|e| e.snapshot.clone())
    }
}

#[async_trait]
impl DataHandlerPort for SnapshotDataHandler {
    #[instrument(skip(self), fields(entry = %data_class))]
    async fn register_data_class(&self, data_class: &DataClass) -> Result<(), ApplicationError> {
        let entry_name = data_class.entry_name();
        {
            let mut registry = self.registry.write();
            if let Some(entry) = registry.entries.get_mut(&entry_name) {
                entry.subscribers += 1;
                return Ok(());
            }
            registry.entries.insert(
                entry_name.clone(),
                Entry {
                    data_class: data_class.clone(),
                    subscribers: 1,
                    snapshot: None,
                    next_scan: Instant::now() + data_class.scan_interval(),
                },
            );
            registry.queue.push_back(entry_name.clone());
        }

        info!(entry = %entry_name, "Data class registered");
        self.fetch(&entry_name, data_class).await;
        Ok(())
    }

    async fn unregister_data_class(&self, entry_name: &str) {
        let mut registry = self.registry.write();
        let Some(entry) = registry.entries.get_mut(entry_name) else {
            return;
        };
        entry.subscribers -= 1;
        if entry.subscribers == 0 {
            registry.entries.remove(entry_name);
            registry.queue.retain(|name| name != entry_name);
            debug!(entry = entry_name, "Data class released");
        }
    }

    fn station_snapshot(&self, entry_name: &str) -> Option<Arc<dyn StationSnapshot>> {
        match self.snapshot(entry_name)? {
            Snapshot::Stations(data) => Some(data),
            Snapshot::Public(_) => None,
        }
    }

    fn public_snapshot(&self, entry_name: &str) -> Option<Arc<dyn PublicSnapshot>> {
        match self.snapshot(entry_name)? {
            Snapshot::Public(data) => Some(data),
            Snapshot::Stations(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const STATIONS: &str = r#"{"body": {"devices": [{"_id": "70:ee", "type": "NAMain"}]}}"#;

    #[derive(Default)]
    struct CountingSource {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl SnapshotSource for CountingSource {
        async fn fetch(&self, data_class: &DataClass) -> Result<String, SnapshotSourceError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            match data_class {
                DataClass::Public { .. } => Err(SnapshotSourceError::NotFound("public".into())),
                _ => Ok(STATIONS.to_string()),
            }
        }
    }

    fn handler() -> (SnapshotDataHandler, Arc<CountingSource>) {
        let source = Arc::new(CountingSource::default());
        (SnapshotDataHandler::new(source.clone()), source)
    }

    #[tokio::test]
    async fn first_registration_fetches() {
        let (handler, source) = handler();
        handler
            .register_data_class(&DataClass::WeatherStation)
            .await
            .unwrap();
        handler
            .register_data_class(&DataClass::WeatherStation)
            .await
            .unwrap();

        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(handler.subscribers("WeatherStationData"), 2);
        assert!(handler.station_snapshot("WeatherStationData").is_some());
        assert!(handler.public_snapshot("WeatherStationData").is_none());
    }

    #[tokio::test]
    async fn last_unregistration_drops_entry() {
        let (handler, _) = handler();
        handler
            .register_data_class(&DataClass::HomeCoach)
            .await
            .unwrap();
        handler
            .register_data_class(&DataClass::HomeCoach)
            .await
            .unwrap();

        handler.unregister_data_class("HomeCoachData").await;
        assert!(handler.station_snapshot("HomeCoachData").is_some());

        handler.unregister_data_class("HomeCoachData").await;
        assert_eq!(handler.subscribers("HomeCoachData"), 0);
        assert!(handler.station_snapshot("HomeCoachData").is_none());
        assert!(handler.entry_names().is_empty());
    }

    #[tokio::test]
    async fn unknown_unregistration_is_ignored() {
        let (handler, _) = handler();
        handler.unregister_data_class("WeatherStationData").await;
        assert_eq!(handler.subscribers("WeatherStationData"), 0);
    }

    #[tokio::test]
    async fn nothing_is_due_before_scan_interval() {
        let (handler, source) = handler();
        handler
            .register_data_class(&DataClass::WeatherStation)
            .await
            .unwrap();

        assert!(handler.poll_due(Instant::now()).await.is_empty());
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }
}
