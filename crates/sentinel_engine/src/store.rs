use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use sentinel_core::{ServerIdentity, Snapshot};
use thiserror::Error;

use crate::persist::{write_atomic, PersistError};

const JOBS_FILENAME: &str = "sentinel_jobs.json";
const SERVER_FILENAME: &str = "sentinel_server.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed state file {path:?}: {reason}")]
    Malformed { path: PathBuf, reason: String },
    #[error("could not serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders a snapshot as a pretty-printed JSON object, job names ascending.
pub fn snapshot_to_json(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
    let map: BTreeMap<&str, &str> = snapshot
        .iter()
        .map(|(name, color)| (name, color.as_str()))
        .collect();
    serde_json::to_string_pretty(&map)
}

/// Parses the JSON object form back into a snapshot.
pub fn snapshot_from_json(text: &str) -> Result<Snapshot, serde_json::Error> {
    let map: BTreeMap<String, String> = serde_json::from_str(text)?;
    Ok(map.into_iter().collect())
}

/// Durable (server identity, snapshot) pair in one directory: a JSON object
/// of jobs plus a single-line identity record. Both files are overwritten on
/// every save, never appended.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Loads the persisted pair. Absent files are not an error; they mean no
    /// state has been written yet.
    pub fn load(&self) -> Result<Option<(ServerIdentity, Snapshot)>, StoreError> {
        let server_path = self.dir.join(SERVER_FILENAME);
        let identity_line = match fs::read_to_string(&server_path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StoreError::Read {
                    path: server_path,
                    source: err,
                })
            }
        };
        let identity = ServerIdentity::from_canonical(identity_line.trim_end_matches(['\r', '\n']));

        let jobs_path = self.dir.join(JOBS_FILENAME);
        let jobs_text = match fs::read_to_string(&jobs_path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StoreError::Read {
                    path: jobs_path,
                    source: err,
                })
            }
        };
        let snapshot = snapshot_from_json(&jobs_text).map_err(|err| StoreError::Malformed {
            path: jobs_path,
            reason: err.to_string(),
        })?;

        Ok(Some((identity, snapshot)))
    }

    /// Writes both files atomically. The jobs file goes first so an identity
    /// record never points at a stale snapshot from a different server.
    pub fn save(&self, identity: &ServerIdentity, snapshot: &Snapshot) -> Result<(), StoreError> {
        let json = snapshot_to_json(snapshot)?;
        write_atomic(&self.dir, JOBS_FILENAME, &json)?;
        write_atomic(&self.dir, SERVER_FILENAME, identity.as_str())?;
        Ok(())
    }
}
