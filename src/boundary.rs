use std::fmt;

/// Non-fatal conditions met while preparing a release.
/// These are reported to the user but do not stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Repository has neither releases nor tags
    NoPriorVersion { baseline: String },
    /// No release exists; the latest tag was used instead
    FellBackToTag { tag: String },
    /// The compare range between the previous tag and the branch is empty
    NoNewCommits { latest_tag: String, branch: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPriorVersion { baseline } => {
                write!(
                    f,
                    "No releases or tags found, starting from {}",
                    baseline
                )
            }
            BoundaryWarning::FellBackToTag { tag } => {
                write!(f, "No releases found, using latest tag '{}'", tag)
            }
            BoundaryWarning::NoNewCommits { latest_tag, branch } => {
                write!(
                    f,
                    "No new commits on '{}' since '{}'",
                    branch, latest_tag
                )
            }
        }
    }
}
