use tracing::info;

use crate::domain::ReleaseDraft;
use crate::error::{ReleaseError, Result};
use crate::github::{PublishedRelease, ReleaseApi};

/// Status GitHub answers with when a release was created
pub const CREATED: u16 = 201;

/// Create the release for `version` on `target_branch`.
///
/// Any status other than 201 is an error, even a 2xx one.
pub fn publish_release<A: ReleaseApi + ?Sized>(
    api: &A,
    version: &str,
    body: &str,
    target_branch: &str,
) -> Result<PublishedRelease> {
    let draft = ReleaseDraft::new(version, target_branch, body);
    let published = api.create_release(&draft)?;

    if published.status != CREATED {
        return Err(ReleaseError::api(
            "Failed to create release",
            published.status,
        ));
    }

    info!(tag = %draft.tag_name, url = ?published.html_url, "release created");
    Ok(published)
}
