//! Domain types shared across modules.

use crate::api::Endpoint;

/// A repository tracked by one of the Travis instances.
///
/// The same slug may exist on both endpoints; those are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// `owner/name`
    pub slug: String,
    pub endpoint: Endpoint,
}

impl Repository {
    pub fn new(slug: impl Into<String>, endpoint: Endpoint) -> Self {
        Self {
            slug: slug.into(),
            endpoint,
        }
    }
}

/// What `restart_latest_build` did for one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    /// Restart request was sent for this build
    Restarted(u64),
    /// Dry run: this build would have been restarted
    DryRun(u64),
}
