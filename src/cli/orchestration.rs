//! Main workflow orchestration logic
//!
//! Runs the release pipeline: resolve the latest version, increment it,
//! collect and render release notes, then publish. Kept separate from
//! argument parsing so the workflow can run against any [ReleaseApi].

use std::path::PathBuf;

use tracing::info;

use crate::boundary::BoundaryWarning;
use crate::changelog::{collect_changes, render_release_body, ChangeEntries};
use crate::config::Settings;
use crate::domain::{increment_version, VersionBump, BASELINE_VERSION};
use crate::error::Result;
use crate::github::ReleaseApi;
use crate::output::export_versions;
use crate::publisher::publish_release;
use crate::resolver::{resolve_latest_version, LatestVersion};
use crate::ui;

/// Arguments for the release workflow
///
/// Decoupled from clap so the workflow can be called programmatically.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Version component to increment
    pub increment: VersionBump,

    /// Free-text note appended to the release body
    pub notes: Option<String>,

    /// Branch the release targets and commits are compared against
    pub branch: String,

    /// File receiving `latest_version` / `new_version`
    pub output_file: Option<PathBuf>,

    /// Preview mode - render notes but don't create the release
    pub dry_run: bool,
}

impl ReleaseWorkflowArgs {
    /// Build workflow arguments from resolved settings
    pub fn from_settings(settings: &Settings, dry_run: bool) -> Self {
        ReleaseWorkflowArgs {
            increment: settings.increment,
            notes: settings.notes.clone(),
            branch: settings.branch.clone(),
            output_file: settings.output_file.clone(),
            dry_run,
        }
    }
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Latest version before this run (the baseline if none existed)
    pub latest_version: String,

    /// The version computed for this run
    pub new_version: String,

    /// Rendered release notes
    pub body: String,

    /// Whether the release was created
    pub published: bool,

    /// Web URL of the created release, when GitHub returned one
    pub release_url: Option<String>,
}

/// Main release workflow
///
/// 1. Resolve the latest release or tag
/// 2. Compute the next version
/// 3. Export both versions to the output file, if configured
/// 4. Collect commits and render the release body
/// 5. Create the release (skipped in dry-run mode)
///
/// Any error aborts the run; a created release is never rolled back.
pub fn run_release_workflow<A: ReleaseApi + ?Sized>(
    api: &A,
    args: &ReleaseWorkflowArgs,
) -> Result<WorkflowResult> {
    let latest = resolve_latest_version(api)?;
    match &latest {
        LatestVersion::Tag(tag) => {
            ui::display_boundary_warning(&BoundaryWarning::FellBackToTag { tag: tag.clone() })
        }
        LatestVersion::None => ui::display_boundary_warning(&BoundaryWarning::NoPriorVersion {
            baseline: BASELINE_VERSION.to_string(),
        }),
        LatestVersion::Release(_) => {}
    }

    let latest_version = latest.as_str().to_string();
    let new_version = increment_version(&latest_version, args.increment)?.to_string();
    info!(%latest_version, %new_version, increment = %args.increment, "computed next version");
    ui::display_version_change(&latest_version, &new_version);

    if let Some(path) = &args.output_file {
        export_versions(path, &latest_version, &new_version)?;
    }

    let entries = collect_changes(api, &latest, &args.branch)?;
    if matches!(&entries, ChangeEntries::Commits(commits) if commits.is_empty()) {
        ui::display_boundary_warning(&BoundaryWarning::NoNewCommits {
            latest_tag: latest_version.clone(),
            branch: args.branch.clone(),
        });
    }

    let body = render_release_body(&entries, args.notes.as_deref());
    ui::display_release_notes(&body);

    if args.dry_run {
        ui::display_dry_run_summary(&new_version, &args.branch);
        return Ok(WorkflowResult {
            latest_version,
            new_version,
            body,
            published: false,
            release_url: None,
        });
    }

    ui::display_status(&format!("Creating release {}", new_version));
    let published = publish_release(api, &new_version, &body, &args.branch)?;
    ui::display_success(&format!("Release {} created successfully!", new_version));

    Ok(WorkflowResult {
        latest_version,
        new_version,
        body,
        published: true,
        release_url: published.html_url,
    })
}
