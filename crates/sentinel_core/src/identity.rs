use std::fmt;

use url::Url;

/// Canonical identifier of the observed server or offline source.
///
/// Persisted state is only applied when the identity it was written under
/// matches the identity the process is currently configured against, so two
/// inputs naming the same server must canonicalize to the same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerIdentity(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    Empty,
    InvalidUrl(String),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::Empty => write!(f, "server url is empty"),
            IdentityError::InvalidUrl(reason) => write!(f, "invalid server url: {reason}"),
        }
    }
}

impl std::error::Error for IdentityError {}

impl ServerIdentity {
    /// Canonicalizes a server URL: whitespace and trailing slashes stripped,
    /// `https` scheme inferred when none is given.
    pub fn from_url(raw: &str) -> Result<Self, IdentityError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(IdentityError::Empty);
        }
        let candidate = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };
        let parsed =
            Url::parse(&candidate).map_err(|err| IdentityError::InvalidUrl(err.to_string()))?;
        // Url renders a bare host with a trailing slash; strip it so the
        // canonical form is stable under re-parsing.
        Ok(Self(parsed.as_str().trim_end_matches('/').to_string()))
    }

    /// Identity of an offline source: the path string, verbatim.
    pub fn from_path(path: &str) -> Self {
        Self(path.to_string())
    }

    /// Re-wraps an already-canonical string, e.g. one read back from disk.
    pub fn from_canonical(canonical: impl Into<String>) -> Self {
        Self(canonical.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
