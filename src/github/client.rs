use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::{Agent, AgentBuilder, Request};

use crate::domain::{CommitRecord, ReleaseDraft};
use crate::error::{ReleaseError, Result};
use crate::github::types::{Comparison, PublishedRelease, Release, Tag};
use crate::github::ReleaseApi;

/// Default GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

/// Characters escaped in a ref placed in a URL path. `/` is kept so
/// branches like `release/1.x` stay readable.
const REF_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Escape a git ref for use in a URL path
pub fn encode_ref(git_ref: &str) -> String {
    utf8_percent_encode(git_ref, REF_SEGMENT).to_string()
}

/// Blocking GitHub client bound to one repository.
///
/// The token is captured once at construction and sent as a bearer
/// credential on every request.
pub struct GitHubClient {
    agent: Agent,
    api_url: String,
    owner: String,
    repo: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for `owner/repo` against the given API root
    pub fn new(
        api_url: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let agent = AgentBuilder::new()
            .user_agent(concat!("gh-release-cut/", env!("CARGO_PKG_VERSION")))
            .build();

        GitHubClient {
            agent,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
        }
    }

    /// URL of a path under `/repos/{owner}/{repo}`
    pub fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url,
            self.owner,
            self.repo,
            path.trim_start_matches('/')
        )
    }

    fn authorized(&self, request: Request) -> Request {
        request
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", ACCEPT)
            .set("X-GitHub-Api-Version", API_VERSION)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, context: &str) -> Result<T> {
        let url = self.repo_url(path);
        debug!(%url, "GET");

        let response = self
            .authorized(self.agent.get(&url))
            .call()
            .map_err(|e| map_ureq_error(e, context))?;

        debug!(status = response.status(), %url, "response");
        Ok(response.into_json()?)
    }
}

fn map_ureq_error(err: ureq::Error, context: &str) -> ReleaseError {
    match err {
        ureq::Error::Status(status, _) => ReleaseError::api(context, status),
        ureq::Error::Transport(transport) => {
            ReleaseError::transport(format!("{}: {}", context, transport))
        }
    }
}

impl ReleaseApi for GitHubClient {
    fn list_releases(&self) -> Result<Vec<Release>> {
        self.get_json("releases", "Failed to fetch releases")
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        self.get_json("tags", "Failed to fetch tags")
    }

    fn compare_commits(&self, base: &str, head: &str) -> Result<Vec<CommitRecord>> {
        let comparison: Comparison = self.get_json(
            &format!("compare/{}...{}", encode_ref(base), encode_ref(head)),
            "Failed to fetch commits",
        )?;

        Ok(comparison
            .commits
            .into_iter()
            .map(CommitRecord::from)
            .collect())
    }

    fn create_release(&self, draft: &ReleaseDraft) -> Result<PublishedRelease> {
        let url = self.repo_url("releases");
        debug!(%url, tag = %draft.tag_name, "POST");

        let response = self
            .authorized(self.agent.post(&url))
            .send_json(draft)
            .map_err(|e| map_ureq_error(e, "Failed to create release"))?;

        let status = response.status();
        let created: Option<Release> = response.into_json().ok();

        Ok(PublishedRelease {
            status,
            html_url: created.and_then(|r| r.html_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    /// Answer exactly one request with `status_line` and a JSON `body`.
    /// The join handle yields the raw request text.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });

        (url, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let head = text[..end].to_ascii_lowercase();
                let content_length = head
                    .lines()
                    .filter_map(|line| line.strip_prefix("content-length:"))
                    .find_map(|v| v.trim().parse::<usize>().ok());

                let complete = match content_length {
                    Some(len) => buf.len() >= end + 4 + len,
                    None if head.contains("transfer-encoding: chunked") => {
                        text.ends_with("0\r\n\r\n")
                    }
                    None => true,
                };
                if complete {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&buf).to_string()
    }

    fn header_lines(request: &str) -> Vec<String> {
        request
            .split("\r\n\r\n")
            .next()
            .unwrap_or("")
            .lines()
            .map(|l| l.to_ascii_lowercase())
            .collect()
    }

    const COMPARE_BODY: &str = r#"{"commits": [
        {"sha": "abcdef0123456", "html_url": "https://github.com/o/r/commit/abcdef0123456",
         "commit": {"message": "feat: one", "author": {"name": "Mona"}}, "author": null}
    ]}"#;

    #[test]
    fn test_repo_url() {
        let client = GitHubClient::new(DEFAULT_API_URL, "octo", "widgets", "t");
        assert_eq!(
            client.repo_url("releases"),
            "https://api.github.com/repos/octo/widgets/releases"
        );
    }

    #[test]
    fn test_repo_url_trims_slashes() {
        let client = GitHubClient::new("https://ghe.example.com/api/v3/", "o", "r", "t");
        assert_eq!(
            client.repo_url("/compare/v1.0.0...main"),
            "https://ghe.example.com/api/v3/repos/o/r/compare/v1.0.0...main"
        );
    }

    #[test]
    fn test_transport_error_is_reported() {
        // Nothing listens on port 9 locally; the request fails before any status.
        let client = GitHubClient::new("http://127.0.0.1:9", "o", "r", "t");
        let err = client.list_releases().unwrap_err();
        assert!(matches!(err, ReleaseError::Transport(_)));
        assert!(err.to_string().contains("Failed to fetch releases"));
    }

    #[test]
    fn test_requests_carry_auth_and_accept_headers() {
        let (url, server) = serve_once("200 OK", r#"[{"tag_name": "v1.2.3"}]"#);
        let client = GitHubClient::new(url, "octo", "widgets", "s3cret");

        let releases = client.list_releases().unwrap();
        let request = server.join().unwrap();

        assert_eq!(releases, vec![Release::new("v1.2.3")]);
        assert!(request.starts_with("GET /repos/octo/widgets/releases HTTP/1.1\r\n"));
        let headers = header_lines(&request);
        assert!(headers.contains(&"authorization: bearer s3cret".to_string()));
        assert!(headers.contains(&"accept: application/vnd.github+json".to_string()));
        assert!(headers
            .iter()
            .any(|h| h.starts_with("user-agent: gh-release-cut/")));
    }

    #[test]
    fn test_error_status_becomes_api_error() {
        let (url, server) = serve_once("404 Not Found", r#"{"message": "Not Found"}"#);
        let client = GitHubClient::new(url, "o", "r", "t");

        let err = client.list_tags().unwrap_err();
        let request = server.join().unwrap();

        assert!(request.starts_with("GET /repos/o/r/tags "));
        assert!(matches!(err, ReleaseError::Api { status: 404, .. }));
        assert_eq!(err.to_string(), "Failed to fetch tags: HTTP 404");
    }

    #[test]
    fn test_compare_decodes_commits() {
        let (url, server) = serve_once("200 OK", COMPARE_BODY);
        let client = GitHubClient::new(url, "o", "r", "t");

        let commits = client.compare_commits("v1.0.0", "main").unwrap();
        let request = server.join().unwrap();

        assert!(request.starts_with("GET /repos/o/r/compare/v1.0.0...main "));
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].short_hash, "abcdef0");
        assert_eq!(commits[0].author, "Mona");
        assert_eq!(commits[0].message, "feat: one");
    }

    #[test]
    fn test_compare_escapes_refs() {
        let (url, server) = serve_once("200 OK", r#"{"commits": []}"#);
        let client = GitHubClient::new(url, "o", "r", "t");

        let commits = client.compare_commits("v1.0.0", "fix#12?x%").unwrap();
        let request = server.join().unwrap();

        assert!(commits.is_empty());
        assert!(request.starts_with("GET /repos/o/r/compare/v1.0.0...fix%2312%3Fx%25 "));
    }

    #[test]
    fn test_encode_ref() {
        assert_eq!(encode_ref("main"), "main");
        assert_eq!(encode_ref("release/1.x"), "release/1.x");
        assert_eq!(encode_ref("a b#c"), "a%20b%23c");
    }

    #[test]
    fn test_create_release_reports_status_and_sends_draft() {
        let (url, server) = serve_once(
            "201 Created",
            r#"{"tag_name": "2.4.0", "html_url": "https://github.com/o/r/releases/tag/2.4.0"}"#,
        );
        let client = GitHubClient::new(url, "o", "r", "t");
        let draft = ReleaseDraft::new("2.4.0", "main", "### Changes in this release:\n\n");

        let published = client.create_release(&draft).unwrap();
        let request = server.join().unwrap();

        assert_eq!(published.status, 201);
        assert_eq!(
            published.html_url.as_deref(),
            Some("https://github.com/o/r/releases/tag/2.4.0")
        );
        assert!(request.starts_with("POST /repos/o/r/releases HTTP/1.1\r\n"));
        assert!(header_lines(&request).contains(&"authorization: bearer t".to_string()));

        let body = request.split("\r\n\r\n").nth(1).unwrap();
        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(sent["tag_name"], "2.4.0");
        assert_eq!(sent["target_commitish"], "main");
        assert_eq!(sent["draft"], false);
        assert_eq!(sent["prerelease"], false);
    }

    #[test]
    fn test_create_release_other_success_status_is_reported() {
        let (url, server) = serve_once("200 OK", "{}");
        let client = GitHubClient::new(url, "o", "r", "t");

        let published = client
            .create_release(&ReleaseDraft::new("1.0.0", "main", "b"))
            .unwrap();
        server.join().unwrap();

        assert_eq!(published.status, 200);
        assert_eq!(published.html_url, None);
    }
}
