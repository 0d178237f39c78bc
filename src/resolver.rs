//! Determine the most recent published version of the repository.

use tracing::{debug, info};

use crate::domain::BASELINE_VERSION;
use crate::error::Result;
use crate::github::ReleaseApi;

/// Where the latest version came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestVersion {
    /// Tag name of the most recent formal release
    Release(String),
    /// Name of the most recent tag, used when no release exists
    Tag(String),
    /// Neither a release nor a tag exists
    None,
}

impl LatestVersion {
    /// Version string to increment from; the baseline when nothing exists
    pub fn as_str(&self) -> &str {
        match self {
            LatestVersion::Release(tag) | LatestVersion::Tag(tag) => tag,
            LatestVersion::None => BASELINE_VERSION,
        }
    }

    pub fn is_baseline(&self) -> bool {
        matches!(self, LatestVersion::None)
    }
}

/// Resolve the latest version: first release, else first tag, else none.
///
/// The tags endpoint is only queried when the repository has no releases.
/// A non-success status from either endpoint is returned as an error.
pub fn resolve_latest_version<A: ReleaseApi + ?Sized>(api: &A) -> Result<LatestVersion> {
    let releases = api.list_releases()?;
    if let Some(release) = releases.into_iter().next() {
        info!(tag = %release.tag_name, "found latest release");
        return Ok(LatestVersion::Release(release.tag_name));
    }

    debug!("no releases found, falling back to tags");
    let tags = api.list_tags()?;
    if let Some(tag) = tags.into_iter().next() {
        info!(tag = %tag.name, "found latest tag");
        return Ok(LatestVersion::Tag(tag.name));
    }

    info!("no releases or tags found, starting from {}", BASELINE_VERSION);
    Ok(LatestVersion::None)
}
