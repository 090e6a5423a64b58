//! Sentinel engine: transports, persistence and the reconciliation watcher.
mod persist;
mod sink;
mod source;
mod store;
mod watcher;

pub use persist::{ensure_state_dir, PersistError};
pub use sink::{ConsoleSink, DispatchError, EventSink, SinkResult};
pub use source::{FileJobSource, HttpJobSource, HttpSettings, JobSource, TransportError};
pub use store::{snapshot_from_json, snapshot_to_json, SnapshotStore, StoreError};
pub use watcher::{CycleReport, DispatchOutcome, Watcher};
