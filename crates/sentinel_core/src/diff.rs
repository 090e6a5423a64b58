use crate::{classify, EventKind, Snapshot};

/// Computes the ordered set of lifecycle events between two snapshots.
///
/// Deletions come first, then creations and indicator changes, each group in
/// ascending job-name order. Jobs with an unchanged indicator produce
/// nothing, so a snapshot diffed against itself yields an empty list.
pub fn diff(old: &Snapshot, new: &Snapshot) -> Vec<(String, EventKind)> {
    let mut events = Vec::new();
    for name in old.job_names() {
        if !new.contains(name) {
            if let Some(kind) = classify(old.get(name), None) {
                events.push((name.to_string(), kind));
            }
        }
    }
    for (name, color) in new.iter() {
        if let Some(kind) = classify(old.get(name), Some(color)) {
            events.push((name.to_string(), kind));
        }
    }
    events
}
