//! GitHub REST API abstraction layer
//!
//! This module provides a trait-based abstraction over the four endpoints a
//! release run needs, allowing the workflow to run against the real API or
//! an in-memory double in tests.
//!
//! # Overview
//!
//! The primary abstraction is the [ReleaseApi] trait. The concrete
//! implementations are:
//!
//! - [client::GitHubClient]: blocking HTTP implementation using `ureq`
//! - [mock::MockReleaseApi]: in-memory implementation for testing
//!
//! Most code should depend on the [ReleaseApi] trait rather than on a
//! concrete client.
//!
//! ```rust
//! # use gh_release_cut::github::ReleaseApi;
//! # fn example<A: ReleaseApi>(api: &A) -> gh_release_cut::Result<()> {
//! let releases = api.list_releases()?;
//! if let Some(latest) = releases.first() {
//!     let commits = api.compare_commits(&latest.tag_name, "main")?;
//!     println!("{} commits since {}", commits.len(), latest.tag_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod mock;
pub mod types;

pub use client::GitHubClient;
pub use mock::MockReleaseApi;
pub use types::{PublishedRelease, Release, Tag};

use crate::domain::{CommitRecord, ReleaseDraft};
use crate::error::Result;

/// Release-related operations against a single repository
///
/// ## Error Handling
///
/// Every method maps a non-success HTTP status to
/// [ReleaseError::Api](crate::error::ReleaseError::Api) carrying the status
/// code, and connection failures to
/// [ReleaseError::Transport](crate::error::ReleaseError::Transport).
pub trait ReleaseApi {
    /// List releases, most recent first
    fn list_releases(&self) -> Result<Vec<Release>>;

    /// List tags, most recent first
    fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Commits reachable from `head` but not from `base`, oldest first
    ///
    /// # Arguments
    /// * `base` - The previous release tag (e.g., "v1.2.3")
    /// * `head` - The branch being released (e.g., "main")
    fn compare_commits(&self, base: &str, head: &str) -> Result<Vec<CommitRecord>>;

    /// Submit a new release
    ///
    /// Returns the status of any 2xx response; callers decide whether that
    /// status means the release was created.
    fn create_release(&self, draft: &ReleaseDraft) -> Result<PublishedRelease>;
}
