use crate::Indicator;

/// Classified lifecycle event for one job, produced by comparing two polls.
///
/// Events are ephemeral: they are dispatched within one reconciliation cycle
/// and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Created,
    Deleted,
    BuildStarted,
    BuildPassed,
    BuildFailed,
    BuildAborted,
    /// Indicator change the classifier does not recognize; carries both
    /// tokens verbatim for diagnostics.
    UnknownTransition { old: Indicator, new: Indicator },
}

impl EventKind {
    /// Short stable label, used in logs and cycle reports.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Created => "created",
            EventKind::Deleted => "deleted",
            EventKind::BuildStarted => "started",
            EventKind::BuildPassed => "passed",
            EventKind::BuildFailed => "failed",
            EventKind::BuildAborted => "aborted",
            EventKind::UnknownTransition { .. } => "unknown",
        }
    }
}
