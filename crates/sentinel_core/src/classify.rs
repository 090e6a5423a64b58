use crate::{EventKind, Indicator, Outcome};

/// Classifies one job's transition between two polls.
///
/// `old` is the indicator from the previous snapshot (`None` when the job did
/// not exist), `new` the indicator from the current one (`None` when the job
/// is gone). Returns `None` when nothing changed.
///
/// The running-marker check runs before the outcome-class checks: some
/// encodings keep stale outcome bits in the token while a build is in
/// progress, and a transition into the running state must be reported as
/// `BuildStarted`, not as a repeat of the old outcome.
pub fn classify(old: Option<&Indicator>, new: Option<&Indicator>) -> Option<EventKind> {
    let (old, new) = match (old, new) {
        (Some(_), None) => return Some(EventKind::Deleted),
        (None, Some(_)) => return Some(EventKind::Created),
        (None, None) => return None,
        (Some(old), Some(new)) => (old, new),
    };

    if old == new {
        return None;
    }
    if new.is_running() && !old.is_running() {
        return Some(EventKind::BuildStarted);
    }
    match new.outcome() {
        Outcome::Aborted => Some(EventKind::BuildAborted),
        Outcome::Failure => Some(EventKind::BuildFailed),
        Outcome::Success => Some(EventKind::BuildPassed),
        Outcome::NotBuilt | Outcome::Disabled | Outcome::Other => {
            Some(EventKind::UnknownTransition {
                old: old.clone(),
                new: new.clone(),
            })
        }
    }
}
