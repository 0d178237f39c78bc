//! Domain logic - pure release rules independent of the GitHub API

pub mod commit;
pub mod release;
pub mod version;

pub use commit::CommitRecord;
pub use release::ReleaseDraft;
pub use version::{increment_version, Version, VersionBump, BASELINE_VERSION};
