use std::error::Error;

use sentinel_core::Indicator;
use thiserror::Error as ThisError;

/// Result type for sink handlers. A failing handler is isolated to its job;
/// it never aborts the rest of the cycle.
pub type SinkResult = Result<(), Box<dyn Error + Send + Sync>>;

/// Consumer of classified lifecycle events, one handler per event kind.
///
/// Handlers are invoked synchronously and in diff order within a cycle, so a
/// slow handler delays the handlers after it and the cycle's persist step.
/// Deployments override this trait to route events wherever they need.
pub trait EventSink {
    fn job_created(&self, name: &str) -> SinkResult;
    fn job_deleted(&self, name: &str) -> SinkResult;
    fn build_started(&self, name: &str) -> SinkResult;
    fn build_passed(&self, name: &str) -> SinkResult;
    fn build_failed(&self, name: &str) -> SinkResult;
    fn build_aborted(&self, name: &str) -> SinkResult;
    fn unknown_transition(&self, name: &str, old: &Indicator, new: &Indicator) -> SinkResult;
}

/// A sink handler failed for one job. Carries the attempted call so the
/// failure can be diagnosed without re-running the cycle.
#[derive(Debug, ThisError)]
#[error("handler '{event}' failed for ({args}): {source}")]
pub struct DispatchError {
    pub job: String,
    pub event: &'static str,
    pub args: String,
    #[source]
    pub source: Box<dyn Error + Send + Sync>,
}

/// Default sink: one human-readable line per event on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn job_created(&self, name: &str) -> SinkResult {
        println!("Job created: {name}");
        Ok(())
    }

    fn job_deleted(&self, name: &str) -> SinkResult {
        println!("Job deleted: {name}");
        Ok(())
    }

    fn build_started(&self, name: &str) -> SinkResult {
        println!("Build started: {name}");
        Ok(())
    }

    fn build_passed(&self, name: &str) -> SinkResult {
        println!("Build passed: {name}");
        Ok(())
    }

    fn build_failed(&self, name: &str) -> SinkResult {
        println!("Build failed: {name}");
        Ok(())
    }

    fn build_aborted(&self, name: &str) -> SinkResult {
        println!("Build aborted: {name}");
        Ok(())
    }

    fn unknown_transition(&self, name: &str, old: &Indicator, new: &Indicator) -> SinkResult {
        println!("Unrecognized color change: {name} {old}->{new}");
        Ok(())
    }
}
