/// Length of the abbreviated commit hash shown in release notes
pub const SHORT_HASH_LEN: usize = 7;

/// A commit introduced since the previous release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub message: String,
    pub author: String,
    pub short_hash: String,
    pub url: String,
}

impl CommitRecord {
    /// Create a record from a full SHA, shortening it for display
    pub fn new(
        sha: &str,
        message: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        CommitRecord {
            message: message.into(),
            author: author.into(),
            short_hash: sha.chars().take(SHORT_HASH_LEN).collect(),
            url: url.into(),
        }
    }

    /// First line of the commit message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim()
    }

    /// Render as a single markdown bullet line
    /// (e.g. "- fix: typo ([`abc1234`](https://...)) by octocat")
    pub fn to_bullet(&self) -> String {
        format!(
            "- {} ([`{}`]({})) by {}",
            self.summary(),
            self.short_hash,
            self.url,
            self.author
        )
    }
}
