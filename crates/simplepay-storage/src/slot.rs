//! # Named-Slot Snapshot Store
//!
//! Three independent named slots, each one JSON file holding a whole
//! serialized aggregate. Reads happen once at process start; every
//! mutation overwrites the affected slot in full (no incremental
//! updates).
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Atomic Slot Replacement                             │
//! │                                                                         │
//! │  write_slot("products", &products)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. serialize to bytes                                                  │
//! │  2. write bytes to  .products.json.tmp  (same directory)                │
//! │  3. fsync the temp file                                                 │
//! │  4. rename(.products.json.tmp → products.json)                          │
//! │                                                                         │
//! │  The rename is atomic on POSIX filesystems: a crash at any step         │
//! │  leaves either the old snapshot or the new one, never a torn file.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Path
//! A missing slot file yields the aggregate's default. A file that fails
//! to parse is treated exactly like a missing one (logged, then
//! defaulted): the tool must come up usable from any on-disk state.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{StorageError, StorageResult};

/// Slot holding the serialized product catalog (`Vec<Product>`).
pub const PRODUCTS_SLOT: &str = "products";

/// Slot holding the serialized sales ledger (`Vec<Sale>`).
pub const SALES_SLOT: &str = "sales";

/// Slot holding the serialized shop profile (`ShopInfo`).
pub const SHOP_INFO_SLOT: &str = "shop_info";

/// File-backed store of named snapshot slots.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Opens (creating if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::OpenFailed {
            path: dir.clone(),
            source,
        })?;
        Ok(SnapshotStore { dir })
    }

    /// The directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads a slot, falling back to `T::default()` when the file is
    /// missing or does not parse.
    pub fn read_slot<T>(&self, slot: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.slot_path(slot);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(slot, "slot file absent, using default");
                return T::default();
            }
            Err(err) => {
                warn!(slot, %err, "slot file unreadable, using default");
                return T::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                warn!(slot, %err, "slot file malformed, using default");
                T::default()
            }
        }
    }

    /// Replaces a slot with the serialized value.
    ///
    /// The new snapshot lands via temp-file + rename so a crash mid-write
    /// cannot corrupt the previous one.
    pub fn write_slot<T>(&self, slot: &str, value: &T) -> StorageResult<()>
    where
        T: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(value).map_err(|source| StorageError::EncodeFailed {
            slot: slot.to_string(),
            source,
        })?;

        let tmp_path = self.dir.join(format!(".{}.json.tmp", slot));
        let write = |path: &Path| -> std::io::Result<()> {
            let mut file = File::create(path)?;
            file.write_all(&bytes)?;
            file.sync_all()
        };

        write(&tmp_path)
            .and_then(|_| fs::rename(&tmp_path, self.slot_path(slot)))
            .map_err(|source| StorageError::WriteFailed {
                slot: slot.to_string(),
                source,
            })?;

        debug!(slot, bytes = bytes.len(), "slot written");
        Ok(())
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
