use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::VersionBump;
use crate::error::{ReleaseError, Result};
use crate::github::client::DEFAULT_API_URL;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "release.toml";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Represents the optional configuration file.
///
/// Every field has a default so an empty file (or no file) is valid.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

/// Returns the default release branch.
fn default_branch() -> String {
    "main".to_string()
}

/// Returns the default API root.
fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Repository identity and the branch releases are cut from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            owner: None,
            name: None,
            branch: default_branch(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            url: default_api_url(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default)]
    pub increment: Option<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `release.toml` in current directory
/// 3. `gh-release-cut.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            ReleaseError::config(format!("Cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("gh-release-cut.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

/// Values supplied by the command line or the environment.
///
/// These win over the configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub owner: Option<String>,
    pub repo: Option<String>,
    /// `owner/name` slug, as exported by GitHub Actions
    pub repository: Option<String>,
    pub token: Option<String>,
    pub increment: Option<String>,
    pub notes: Option<String>,
    pub output_file: Option<PathBuf>,
    pub branch: Option<String>,
    pub api_url: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Clone, PartialEq)]
pub struct Settings {
    pub owner: String,
    pub repo: String,
    pub token: String,
    pub increment: VersionBump,
    pub notes: Option<String>,
    pub output_file: Option<PathBuf>,
    pub branch: String,
    pub api_url: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"<redacted>")
            .field("increment", &self.increment)
            .field("notes", &self.notes)
            .field("output_file", &self.output_file)
            .field("branch", &self.branch)
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Split an `owner/name` slug
fn split_slug(slug: &str) -> Result<(String, String)> {
    match slug.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(ReleaseError::config(format!(
            "Invalid repository '{}' - expected owner/name",
            slug
        ))),
    }
}

impl Settings {
    /// Merge file configuration with overrides and validate required values.
    ///
    /// Owner and name come from explicit overrides, then the config file,
    /// then the `owner/name` slug.
    pub fn resolve(config: Config, overrides: Overrides) -> Result<Self> {
        let slug = non_empty(overrides.repository)
            .map(|s| split_slug(&s))
            .transpose()?;
        let (slug_owner, slug_repo) = match slug {
            Some((owner, repo)) => (Some(owner), Some(repo)),
            None => (None, None),
        };

        let owner = non_empty(overrides.owner)
            .or(non_empty(config.repository.owner))
            .or(slug_owner)
            .ok_or_else(|| ReleaseError::config("Repository owner is not set (GITHUB_OWNER)"))?;

        let repo = non_empty(overrides.repo)
            .or(non_empty(config.repository.name))
            .or(slug_repo)
            .ok_or_else(|| ReleaseError::config("Repository name is not set (GITHUB_REPO)"))?;

        let token = non_empty(overrides.token)
            .ok_or_else(|| ReleaseError::config(format!("{} is not set", TOKEN_ENV)))?;

        let increment = match non_empty(overrides.increment).or(non_empty(config.release.increment))
        {
            Some(kind) => kind.parse::<VersionBump>()?,
            None => VersionBump::default(),
        };

        Ok(Settings {
            owner,
            repo,
            token,
            increment,
            notes: non_empty(overrides.notes),
            output_file: overrides.output_file.filter(|p| !p.as_os_str().is_empty()),
            branch: non_empty(overrides.branch).unwrap_or(config.repository.branch),
            api_url: non_empty(overrides.api_url).unwrap_or(config.api.url),
        })
    }
}

/// Read the API token from the environment
pub fn token_from_env() -> Option<String> {
    non_empty(std::env::var(TOKEN_ENV).ok())
}
