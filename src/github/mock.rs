use std::cell::RefCell;

use crate::domain::{CommitRecord, ReleaseDraft};
use crate::error::{ReleaseError, Result};
use crate::github::types::{PublishedRelease, Release, Tag};
use crate::github::ReleaseApi;

/// Endpoint identifiers used to record calls and inject failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Releases,
    Tags,
    Compare,
    CreateRelease,
}

/// In-memory API for testing without network access
pub struct MockReleaseApi {
    releases: Vec<Release>,
    tags: Vec<Tag>,
    commits: Vec<CommitRecord>,
    create_status: u16,
    failures: Vec<(Endpoint, u16)>,
    calls: RefCell<Vec<Endpoint>>,
    created: RefCell<Vec<ReleaseDraft>>,
}

impl MockReleaseApi {
    /// Create an empty repository: no releases, no tags, no commits
    pub fn new() -> Self {
        MockReleaseApi {
            releases: Vec::new(),
            tags: Vec::new(),
            commits: Vec::new(),
            create_status: 201,
            failures: Vec::new(),
            calls: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
        }
    }

    /// Add a release (first added is treated as the latest)
    pub fn with_release(mut self, tag_name: impl Into<String>) -> Self {
        self.releases.push(Release::new(tag_name));
        self
    }

    /// Add a tag (first added is treated as the latest)
    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(Tag::new(name));
        self
    }

    /// Add a commit returned by the compare endpoint
    pub fn with_commit(mut self, commit: CommitRecord) -> Self {
        self.commits.push(commit);
        self
    }

    /// Status the create endpoint answers with
    pub fn with_create_status(mut self, status: u16) -> Self {
        self.create_status = status;
        self
    }

    /// Make `endpoint` fail with an HTTP `status`
    pub fn failing(mut self, endpoint: Endpoint, status: u16) -> Self {
        self.failures.push((endpoint, status));
        self
    }

    /// Endpoints called so far, in order
    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.borrow().clone()
    }

    /// Drafts submitted to the create endpoint
    pub fn created_releases(&self) -> Vec<ReleaseDraft> {
        self.created.borrow().clone()
    }

    fn record(&self, endpoint: Endpoint, context: &str) -> Result<()> {
        self.calls.borrow_mut().push(endpoint);
        match self.failures.iter().find(|(e, _)| *e == endpoint) {
            Some((_, status)) => Err(ReleaseError::api(context, *status)),
            None => Ok(()),
        }
    }
}

impl Default for MockReleaseApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseApi for MockReleaseApi {
    fn list_releases(&self) -> Result<Vec<Release>> {
        self.record(Endpoint::Releases, "Failed to fetch releases")?;
        Ok(self.releases.clone())
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        self.record(Endpoint::Tags, "Failed to fetch tags")?;
        Ok(self.tags.clone())
    }

    fn compare_commits(&self, _base: &str, _head: &str) -> Result<Vec<CommitRecord>> {
        self.record(Endpoint::Compare, "Failed to fetch commits")?;
        Ok(self.commits.clone())
    }

    fn create_release(&self, draft: &ReleaseDraft) -> Result<PublishedRelease> {
        self.record(Endpoint::CreateRelease, "Failed to create release")?;
        self.created.borrow_mut().push(draft.clone());
        Ok(PublishedRelease {
            status: self.create_status,
            html_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_default_is_empty() {
        let api = MockReleaseApi::default();
        assert!(api.list_releases().unwrap().is_empty());
        assert!(api.list_tags().unwrap().is_empty());
        assert_eq!(api.calls(), vec![Endpoint::Releases, Endpoint::Tags]);
    }

    #[test]
    fn test_mock_failure_injection() {
        let api = MockReleaseApi::new().failing(Endpoint::Tags, 500);
        assert!(api.list_releases().is_ok());
        let err = api.list_tags().unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_mock_records_created_releases() {
        let api = MockReleaseApi::new().with_create_status(200);
        let draft = ReleaseDraft::new("1.0.0", "main", "body");
        let published = api.create_release(&draft).unwrap();
        assert_eq!(published.status, 200);
        assert_eq!(api.created_releases(), vec![draft]);
    }
}
