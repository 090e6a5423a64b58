use std::collections::BTreeMap;

use crate::Indicator;

/// Full observed state at one poll: job name mapped to its status indicator.
///
/// Job names are unique and kept in ascending order, so iteration and the
/// serialized form are deterministic. A snapshot is immutable once built; a
/// new poll produces a new snapshot rather than mutating the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    jobs: BTreeMap<String, Indicator>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Indicator> {
        self.jobs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.jobs.contains_key(name)
    }

    /// Jobs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Indicator)> {
        self.jobs.iter().map(|(name, color)| (name.as_str(), color))
    }

    pub fn job_names(&self) -> impl Iterator<Item = &str> {
        self.jobs.keys().map(String::as_str)
    }

    /// Jobs whose indicator carries the running marker.
    pub fn running_job_names(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, color)| color.is_running())
            .map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl<N, I> FromIterator<(N, I)> for Snapshot
where
    N: Into<String>,
    I: Into<Indicator>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        Self {
            jobs: iter
                .into_iter()
                .map(|(name, color)| (name.into(), color.into()))
                .collect(),
        }
    }
}
