use std::fmt;

/// Substring that marks a job as currently building.
///
/// Jenkins-style servers report a running build by appending this marker to
/// the job's last outcome color, e.g. `blue_anime`.
pub const RUNNING_MARKER: &str = "anime";

/// Raw per-job status token as reported by the server.
///
/// The token combines a build outcome class with an optional running marker.
/// Equality is exact token equality; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Indicator(String);

/// Outcome class of an indicator that is not carrying the running marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    Aborted,
    NotBuilt,
    Disabled,
    Other,
}

impl Indicator {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the token carries the running marker.
    pub fn is_running(&self) -> bool {
        self.0.contains(RUNNING_MARKER)
    }

    /// Outcome class of the exact token. Running variants and anything the
    /// server invents later fall into `Outcome::Other`.
    pub fn outcome(&self) -> Outcome {
        match self.0.as_str() {
            "blue" => Outcome::Success,
            "red" => Outcome::Failure,
            "aborted" => Outcome::Aborted,
            "notbuilt" => Outcome::NotBuilt,
            "disabled" => Outcome::Disabled,
            _ => Outcome::Other,
        }
    }
}

impl From<&str> for Indicator {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Indicator {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
