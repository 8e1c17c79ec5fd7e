//! JSON file save/load for `RecordStore`.
//!
//! # Responsibility
//! - Serialize the full record sequence with indentation.
//! - Replace the target file atomically via a sibling temp file + rename.
//! - Decode the whole file before touching the in-memory store.
//!
//! # Invariants
//! - Missing file on load is not an error: the store stays as it was.
//! - File handles are scoped and closed on every exit path.

use super::{StorageError, StorageResult};
use crate::model::record::Keyed;
use crate::repo::record_store::RecordStore;
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use std::time::Instant;
use tempfile::NamedTempFile;

/// Result of a load attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store now holds exactly this many records from the file.
    Loaded(usize),
    /// No file existed at the path; the store is unchanged.
    NoExistingData,
}

/// Writes every record in `store` to `path` as an indented JSON array.
///
/// # Side effects
/// - Creates a temp file next to `path`, then renames it over `path`.
/// - Emits `store_save` logging events with duration and status.
pub fn save_to_file<T>(store: &RecordStore<T>, path: impl AsRef<Path>) -> StorageResult<()>
where
    T: Keyed + Clone + Serialize,
{
    let path = path.as_ref();
    let started_at = Instant::now();

    match write_atomically(store, path) {
        Ok(()) => {
            info!(
                "event=store_save module=storage status=ok count={} duration_ms={} path={}",
                store.len(),
                started_at.elapsed().as_millis(),
                path.display()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_save module=storage status=error duration_ms={} path={} error={}",
                started_at.elapsed().as_millis(),
                path.display(),
                err
            );
            Err(err)
        }
    }
}

/// Replaces the contents of `store` with the records stored at `path`.
///
/// # Errors
/// - `Deserialization` when the file is not a JSON array of `T`.
/// - `InvalidData` when the records break the store's key policy.
/// - `Io` for any other read failure.
pub fn load_from_file<T>(store: &mut RecordStore<T>, path: impl AsRef<Path>) -> StorageResult<LoadOutcome>
where
    T: Keyed + Clone + DeserializeOwned,
{
    let path = path.as_ref();
    let started_at = Instant::now();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=store_load module=storage status=ok outcome=no_existing_data path={}",
                path.display()
            );
            return Ok(LoadOutcome::NoExistingData);
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let decoded: Result<Vec<T>, _> = serde_json::from_reader(BufReader::new(file));
    let records = match decoded {
        Ok(records) => records,
        Err(source) => {
            error!(
                "event=store_load module=storage status=error error_code=decode_failed path={} error={}",
                path.display(),
                source
            );
            return Err(StorageError::Deserialization {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let count = records.len();
    store
        .replace_all(records)
        .map_err(|err| StorageError::InvalidData(format!("{err} in `{}`", path.display())))?;

    info!(
        "event=store_load module=storage status=ok outcome=loaded count={} duration_ms={} path={}",
        count,
        started_at.elapsed().as_millis(),
        path.display()
    );
    Ok(LoadOutcome::Loaded(count))
}

fn write_atomically<T>(store: &RecordStore<T>, path: &Path) -> StorageResult<()>
where
    T: Keyed + Clone + Serialize,
{
    let io_err = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(parent).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        let records: Vec<&T> = store.iter().collect();
        serde_json::to_writer_pretty(&mut writer, &records)
            .map_err(|err| encode_error(path, err))?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;
    }
    temp.as_file().sync_all().map_err(io_err)?;
    // The temp file is created owner-only; keep the mode of the file it replaces.
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(io_err)?;
    }
    temp.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}

/// Splits writer failures out of `serde_json` errors so they carry the path.
fn encode_error(path: &Path, err: serde_json::Error) -> StorageError {
    if err.is_io() {
        StorageError::Io {
            path: path.to_path_buf(),
            source: err.into(),
        }
    } else {
        StorageError::Serialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::encode_error;
    use crate::storage::StorageError;
    use std::io;
    use std::path::Path;

    #[test]
    fn writer_failure_is_reported_as_io_with_path() {
        let err = serde_json::Error::io(io::Error::new(io::ErrorKind::Other, "disk full"));
        match encode_error(Path::new("inventory.json"), err) {
            StorageError::Io { path, source } => {
                assert_eq!(path, Path::new("inventory.json"));
                assert_eq!(source.kind(), io::ErrorKind::Other);
                assert!(source.to_string().contains("disk full"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn encoding_failure_stays_serialization() {
        let err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        assert!(matches!(
            encode_error(Path::new("inventory.json"), err),
            StorageError::Serialization(_)
        ));
    }
}
