//! Sentinel core: pure snapshot model and change classification.
mod classify;
mod diff;
mod event;
mod identity;
mod indicator;
mod snapshot;

pub use classify::classify;
pub use diff::diff;
pub use event::EventKind;
pub use identity::{IdentityError, ServerIdentity};
pub use indicator::{Indicator, Outcome, RUNNING_MARKER};
pub use snapshot::Snapshot;
