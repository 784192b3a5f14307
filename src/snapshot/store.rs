//! Snapshot Store - checksummed snapshot files.
//!
//! The [`SnapshotStore`] handles all file operations for snapshots:
//! - Writing a snapshot with an integrity header
//! - Reading and verifying a snapshot
//! - Clearing a saved snapshot

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::common::{Error, Result};
use crate::snapshot::Snapshot;

/// Magic bytes identifying a shelfsim snapshot file.
const MAGIC: &[u8; 8] = b"SHELFSNP";

/// Length of the file header (magic + CRC32).
const HEADER_LEN: usize = MAGIC.len() + 4;

/// Reads and writes snapshots at a fixed path.
///
/// # File Layout
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0       8     magic ("SHELFSNP")
/// 8       4     CRC32 of the payload (little-endian)
/// 12      ...   payload (JSON-encoded Snapshot)
/// ```
///
/// # Integrity
/// The checksum is computed over the JSON payload only. A file with a
/// wrong magic, a mismatched checksum, or an unparseable payload fails
/// with `Error::InvalidSnapshot`; the caller decides whether to discard
/// it and start fresh.
///
/// # Usage
/// ```no_run
/// use shelfsim::{Catalog, PagingSimulator, SnapshotStore};
///
/// let mut sim = PagingSimulator::new(Catalog::demo(), 3).unwrap();
/// let store = SnapshotStore::new("paging_sim.snap");
///
/// store.save(&sim.save()).unwrap();
/// let snapshot = store.load().unwrap();
/// sim.load(&snapshot).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store for the given path. No I/O happens until
    /// [`save`](SnapshotStore::save) or [`load`](SnapshotStore::load).
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot file exists at the store's path.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write a snapshot, replacing any previous one.
    ///
    /// The file is synced before returning.
    ///
    /// # Errors
    /// I/O errors from file creation or writing.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let payload = serde_json::to_vec(snapshot)
            .map_err(|e| Error::InvalidSnapshot(e.to_string()))?;
        let checksum = checksum(&payload);

        let mut file = File::create(&self.path)?;
        file.write_all(MAGIC)?;
        file.write_all(&checksum.to_le_bytes())?;
        file.write_all(&payload)?;
        file.sync_all()?;

        Ok(())
    }

    /// Read and verify the stored snapshot.
    ///
    /// # Errors
    /// - `Error::InvalidSnapshot` if the file is truncated, has a wrong
    ///   magic, fails the checksum, or holds unparseable JSON
    /// - `Error::Io` if the file cannot be read (including not existing)
    pub fn load(&self) -> Result<Snapshot> {
        let bytes = fs::read(&self.path)?;

        if bytes.len() < HEADER_LEN {
            return Err(Error::InvalidSnapshot(format!(
                "file too short: {} bytes",
                bytes.len()
            )));
        }
        if &bytes[..MAGIC.len()] != MAGIC {
            return Err(Error::InvalidSnapshot("bad magic".to_string()));
        }

        let stored = u32::from_le_bytes([
            bytes[MAGIC.len()],
            bytes[MAGIC.len() + 1],
            bytes[MAGIC.len() + 2],
            bytes[MAGIC.len() + 3],
        ]);
        let payload = &bytes[HEADER_LEN..];

        let computed = checksum(payload);
        if stored != computed {
            return Err(Error::InvalidSnapshot(format!(
                "checksum mismatch: stored {:08x}, computed {:08x}",
                stored, computed
            )));
        }

        serde_json::from_slice(payload).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Delete the stored snapshot, if any.
    ///
    /// # Errors
    /// I/O errors other than the file not existing.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// CRC32 of a payload.
fn checksum(payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(payload);
    hasher.finalize()
}
