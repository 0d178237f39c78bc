//! Release note assembly.
//!
//! Commits are collected with the two-ref comparison between the previous
//! tag and the release branch, so the notes list exactly the commits the new
//! tag adds on top of the old one.

use tracing::{debug, info};

use crate::domain::CommitRecord;
use crate::error::Result;
use crate::github::ReleaseApi;
use crate::resolver::LatestVersion;

pub const CHANGES_HEADER: &str = "### Changes in this release:";
pub const NOTES_HEADER: &str = "### Additional Notes:";
pub const INITIAL_RELEASE_ENTRY: &str = "Initial release.";

/// The entries that make up the changes section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEntries {
    /// First release of the repository; no history is fetched
    Initial,
    /// Commits introduced since the previous version, oldest first
    Commits(Vec<CommitRecord>),
}

impl ChangeEntries {
    /// Number of commits listed (zero for an initial release)
    pub fn commit_count(&self) -> usize {
        match self {
            ChangeEntries::Initial => 0,
            ChangeEntries::Commits(commits) => commits.len(),
        }
    }
}

/// Collect the commits on `branch` since `previous`.
///
/// When nothing was released before, no request is made and the synthetic
/// initial-release entry is returned instead. A real tag named like the
/// baseline is still compared.
pub fn collect_changes<A: ReleaseApi + ?Sized>(
    api: &A,
    previous: &LatestVersion,
    branch: &str,
) -> Result<ChangeEntries> {
    if previous.is_baseline() {
        debug!("no previous version, using initial release entry");
        return Ok(ChangeEntries::Initial);
    }

    let previous = previous.as_str();
    let commits = api.compare_commits(previous, branch)?;
    info!(count = commits.len(), base = previous, head = branch, "collected commits");
    Ok(ChangeEntries::Commits(commits))
}

/// Render the release body.
///
/// A blank `manual_note` is treated as absent. When present, the body ends
/// with the additional-notes section holding the note verbatim.
pub fn render_release_body(entries: &ChangeEntries, manual_note: Option<&str>) -> String {
    let mut body = format!("{}\n\n", CHANGES_HEADER);

    match entries {
        ChangeEntries::Initial => {
            body.push_str(&format!("- {}\n", INITIAL_RELEASE_ENTRY));
        }
        ChangeEntries::Commits(commits) => {
            for commit in commits {
                body.push_str(&commit.to_bullet());
                body.push('\n');
            }
        }
    }

    if let Some(note) = manual_note.filter(|n| !n.trim().is_empty()) {
        body.push_str(&format!("\n{}\n{}\n", NOTES_HEADER, note));
    }

    body
}
