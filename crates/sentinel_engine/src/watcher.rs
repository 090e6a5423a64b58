use sentinel_core::{diff, EventKind, ServerIdentity, Snapshot};
use watch_logging::{watch_debug, watch_error, watch_info, watch_warn};

use crate::sink::{DispatchError, EventSink};
use crate::store::{snapshot_to_json, SnapshotStore, StoreError};

/// Per-job result of dispatching one classified event.
#[derive(Debug)]
pub enum DispatchOutcome {
    Delivered(EventKind),
    Failed(DispatchError),
}

/// Result of one reconciliation cycle.
///
/// A persist failure does not roll back the in-memory snapshot; it is
/// surfaced here so the caller can decide whether divergence from disk is
/// acceptable until the next successful save.
#[derive(Debug)]
pub struct CycleReport {
    pub changes: Vec<(String, DispatchOutcome)>,
    pub persist_error: Option<StoreError>,
}

/// Holds the current snapshot for one server and turns newly fetched
/// snapshots into dispatched lifecycle events.
///
/// One watcher per server identity; callers must serialize `reconcile` calls
/// since there is exactly one mutable current-snapshot slot.
pub struct Watcher<S: EventSink> {
    identity: ServerIdentity,
    store: SnapshotStore,
    sink: S,
    current: Option<Snapshot>,
}

impl<S: EventSink> Watcher<S> {
    /// Restores persisted state for `identity` when present and applicable.
    ///
    /// A missing, unreadable or identity-mismatched state file means the
    /// watcher starts with no prior snapshot; mismatched history is
    /// discarded, never merged, so diffs cannot be computed against an
    /// unrelated server's jobs.
    pub fn open(identity: ServerIdentity, store: SnapshotStore, sink: S) -> Self {
        let current = match store.load() {
            Ok(Some((stored, snapshot))) if stored == identity => {
                watch_info!("Restored {} jobs for '{}'", snapshot.len(), identity);
                Some(snapshot)
            }
            Ok(Some((stored, _))) => {
                watch_info!(
                    "Server identity changed ('{}' != '{}'); prior history discarded",
                    stored,
                    identity
                );
                None
            }
            Ok(None) => {
                watch_debug!("No persisted state for '{}'", identity);
                None
            }
            Err(err) => {
                watch_warn!("Failed to load persisted state: {err}");
                None
            }
        };
        Self {
            identity,
            store,
            sink,
            current,
        }
    }

    /// Runs one reconciliation cycle: diff, dispatch, adopt, persist.
    ///
    /// The first observation adopts the snapshot without generating events;
    /// announcing every pre-existing job as created would be an event storm,
    /// not a change report.
    pub fn reconcile(&mut self, new_snapshot: Snapshot) -> CycleReport {
        let changes = match self.current.take() {
            None => {
                watch_debug!(
                    "First observation: adopting {} jobs without events",
                    new_snapshot.len()
                );
                Vec::new()
            }
            Some(old) => diff(&old, &new_snapshot)
                .into_iter()
                .map(|(job, kind)| {
                    let outcome = self.dispatch(&job, &kind);
                    (job, outcome)
                })
                .collect(),
        };

        let persist_error = self.store.save(&self.identity, &new_snapshot).err();
        if let Some(err) = &persist_error {
            watch_error!("Failed to persist snapshot for '{}': {}", self.identity, err);
        }
        self.current = Some(new_snapshot);

        CycleReport {
            changes,
            persist_error,
        }
    }

    fn dispatch(&self, job: &str, kind: &EventKind) -> DispatchOutcome {
        let result = match kind {
            EventKind::Created => self.sink.job_created(job),
            EventKind::Deleted => self.sink.job_deleted(job),
            EventKind::BuildStarted => self.sink.build_started(job),
            EventKind::BuildPassed => self.sink.build_passed(job),
            EventKind::BuildFailed => self.sink.build_failed(job),
            EventKind::BuildAborted => self.sink.build_aborted(job),
            EventKind::UnknownTransition { old, new } => {
                self.sink.unknown_transition(job, old, new)
            }
        };
        match result {
            Ok(()) => DispatchOutcome::Delivered(kind.clone()),
            Err(source) => {
                let args = match kind {
                    EventKind::UnknownTransition { old, new } => format!("{job}, {old}, {new}"),
                    _ => job.to_string(),
                };
                let err = DispatchError {
                    job: job.to_string(),
                    event: kind.label(),
                    args,
                    source,
                };
                watch_warn!("Event dispatch failed: {err}");
                DispatchOutcome::Failed(err)
            }
        }
    }

    pub fn identity(&self) -> &ServerIdentity {
        &self.identity
    }

    /// The sink this watcher dispatches into.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Job names in the current snapshot, ascending.
    pub fn job_names(&self) -> Vec<String> {
        self.current
            .iter()
            .flat_map(|snapshot| snapshot.job_names())
            .map(str::to_string)
            .collect()
    }

    /// Jobs whose current indicator carries the running marker.
    pub fn running_job_names(&self) -> Vec<String> {
        self.current
            .iter()
            .flat_map(|snapshot| snapshot.running_job_names())
            .map(str::to_string)
            .collect()
    }

    /// Serialized form of the current snapshot, `{}` before any observation.
    pub fn serialized_snapshot(&self) -> Result<String, StoreError> {
        match &self.current {
            Some(snapshot) => Ok(snapshot_to_json(snapshot)?),
            None => Ok("{}".to_string()),
        }
    }
}
