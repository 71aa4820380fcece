//! Snapshot persistence
//!
//! Every store's full state is written as one JSON blob to a local fjall
//! keyspace, keyed by the store id. Writes happen synchronously on the
//! mutating thread from a change listener, so a write can never race the
//! next mutation. Full snapshots only; last write wins.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::store::Store;
use crate::{Result, TripKitError};

/// Key-value snapshot store backed by a fjall keyspace
pub struct SnapshotStore {
    keyspace: fjall::Keyspace,
}

impl SnapshotStore {
    /// Open (or create) the snapshot database at the given directory
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = fjall::Database::builder(&path)
            .open()
            .map_err(|e| TripKitError::storage(format!("failed to open snapshot database: {e}")))?;
        let keyspace = db
            .keyspace("stores", fjall::KeyspaceCreateOptions::default)
            .map_err(|e| TripKitError::storage(format!("failed to open store keyspace: {e}")))?;
        Ok(Self { keyspace })
    }

    /// Load the snapshot for a store id, if one was previously written
    pub fn load<S: DeserializeOwned>(&self, store_id: &str) -> Result<Option<S>> {
        let bytes = self
            .keyspace
            .get(store_id.as_bytes())
            .map_err(|e| TripKitError::storage(format!("failed to read snapshot: {e}")))?;

        match bytes {
            Some(bytes) => {
                let state = serde_json::from_slice(&bytes).map_err(|e| {
                    TripKitError::storage(format!(
                        "failed to decode snapshot for store '{store_id}': {e}"
                    ))
                })?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    /// Write the full state snapshot for a store id
    pub fn save<S: Serialize>(&self, store_id: &str, state: &S) -> Result<()> {
        let bytes = serde_json::to_vec(state).map_err(|e| {
            TripKitError::storage(format!("failed to encode snapshot for store '{store_id}': {e}"))
        })?;
        self.keyspace
            .insert(store_id.as_bytes(), bytes)
            .map_err(|e| TripKitError::storage(format!("failed to write snapshot: {e}")))?;
        Ok(())
    }

    /// Drop the snapshot for a store id
    pub fn remove(&self, store_id: &str) -> Result<()> {
        self.keyspace
            .remove(store_id.as_bytes())
            .map_err(|e| TripKitError::storage(format!("failed to remove snapshot: {e}")))?;
        Ok(())
    }
}

/// Cross-cutting persistence mechanism attached to every store at
/// application construction
pub struct PersistencePlugin {
    snapshots: Arc<SnapshotStore>,
}

impl PersistencePlugin {
    #[must_use]
    pub fn new(snapshots: Arc<SnapshotStore>) -> Self {
        Self { snapshots }
    }

    /// Hydrate the store from its snapshot (when one exists) and subscribe
    /// a listener that writes the full state after every mutation. A failed
    /// write is logged and otherwise ignored; persistence must not break a
    /// mutation that already happened.
    pub fn attach<S: Store>(&self, store: &mut S) -> Result<()> {
        let store_id = store.id();

        if let Some(snapshot) = self.snapshots.load(store_id)? {
            debug!("hydrating store '{store_id}' from snapshot");
            store.hydrate(snapshot);
        }

        let snapshots = Arc::clone(&self.snapshots);
        store.on_change(Arc::new(move |state| {
            if let Err(err) = snapshots.save(store_id, state) {
                warn!("failed to persist store '{store_id}': {err}");
            }
        }));

        Ok(())
    }
}
