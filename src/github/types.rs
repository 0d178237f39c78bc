//! Wire types for the subset of the GitHub REST API used here

use serde::Deserialize;

use crate::domain::CommitRecord;

/// Entry of `GET /repos/{owner}/{repo}/releases`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Release {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Release {
            tag_name: tag_name.into(),
            name: None,
            html_url: None,
        }
    }
}

/// Entry of `GET /repos/{owner}/{repo}/tags`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }
}

/// Body of `GET /repos/{owner}/{repo}/compare/{base}...{head}`
#[derive(Deserialize, Debug, Clone)]
pub struct Comparison {
    #[serde(default)]
    pub commits: Vec<ApiCommit>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiCommit {
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetail,
    /// GitHub account linked to the commit; null when the email is unknown
    #[serde(default)]
    pub author: Option<Account>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CommitDetail {
    pub message: String,
    #[serde(default)]
    pub author: Option<GitAuthor>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GitAuthor {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Account {
    pub login: String,
}

impl From<ApiCommit> for CommitRecord {
    fn from(api: ApiCommit) -> Self {
        let author = api
            .commit
            .author
            .map(|a| a.name)
            .filter(|name| !name.is_empty())
            .or_else(|| api.author.map(|a| a.login))
            .unwrap_or_else(|| "unknown".to_string());

        CommitRecord::new(&api.sha, api.commit.message, author, api.html_url)
    }
}

/// Outcome of a create-release call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedRelease {
    /// HTTP status returned by the create endpoint
    pub status: u16,
    pub html_url: Option<String>,
}
