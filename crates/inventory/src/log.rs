//! File-backed inventory log.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use recordkeep_core::{DomainResult, Entity, Repository};

use crate::error::{LoadError, SaveError};

/// A repository bound to a JSON file.
///
/// The in-memory repository is authoritative until [`save`](Self::save) is
/// called; [`load`](Self::load) replaces its contents with the file's.
#[derive(Debug)]
pub struct InventoryLog<T: Entity> {
    items: Repository<T>,
    path: PathBuf,
}

impl<T> InventoryLog<T>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
{
    /// Create an empty log bound to `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            items: Repository::new(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn items(&self) -> &Repository<T> {
        &self.items
    }

    pub fn add(&mut self, item: T) -> DomainResult<()> {
        self.items.add(item)
    }

    pub fn get_all(&self) -> Vec<T> {
        self.items.get_all()
    }

    /// Overwrite the file with every item, in insertion order.
    ///
    /// The document is written to a sibling temp file first and then renamed
    /// over the target, so readers see either the old or the new content.
    pub fn save(&self) -> Result<(), SaveError> {
        let snapshot: Vec<&T> = self.items.iter().collect();
        let json = serde_json::to_string_pretty(&snapshot)?;

        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(|source| SaveError::Io {
            path: tmp.clone(),
            source,
        })?;
        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(SaveError::Io {
                path: self.path.clone(),
                source,
            });
        }

        tracing::info!(path = %self.path.display(), items = snapshot.len(), "inventory saved");
        Ok(())
    }

    /// Replace the in-memory items with the file's content.
    ///
    /// A missing file yields an empty log. On any error the log is left
    /// empty. Returns the number of items loaded.
    pub fn load(&mut self) -> Result<usize, LoadError> {
        self.items.clear();

        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "inventory file does not exist; nothing to load");
                return Ok(0);
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let records: Vec<T> = serde_json::from_str(&json).map_err(|source| LoadError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        self.items = Repository::from_entities(records).map_err(|source| LoadError::Inconsistent {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), items = self.items.len(), "inventory loaded");
        Ok(self.items.len())
    }
}
