//! Durable whole-collection persistence for record stores.
//!
//! # Responsibility
//! - Write a store snapshot to an indented JSON file.
//! - Load a JSON file back into a store, replacing its contents.
//!
//! # Invariants
//! - A save either fully replaces the previous file or leaves it intact.
//! - A failed load never partially applies to the target store.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;

pub use json_file::{load_from_file, save_to_file, LoadOutcome};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialization(serde_json::Error),
    /// The file exists but its content is not a valid record sequence.
    Deserialization {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The file decoded, but the records violate the store's invariants.
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::Serialization(err) => write!(f, "failed to serialize records: {err}"),
            Self::Deserialization { path, source } => {
                write!(f, "failed to decode records from `{}`: {source}", path.display())
            }
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialization(err) => Some(err),
            Self::Deserialization { source, .. } => Some(source),
            Self::InvalidData(_) => None,
        }
    }
}
