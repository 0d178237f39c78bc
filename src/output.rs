use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{ReleaseError, Result};

pub const LATEST_VERSION_KEY: &str = "latest_version";
pub const NEW_VERSION_KEY: &str = "new_version";

/// Append `key=value` lines to the automation output file.
///
/// The file is created when missing; existing lines are kept. Values must be
/// single-line.
pub fn export_outputs(path: &Path, outputs: &[(&str, &str)]) -> Result<()> {
    if let Some((key, _)) = outputs.iter().find(|(_, value)| value.contains('\n')) {
        return Err(ReleaseError::config(format!(
            "Output '{}' must be a single line",
            key
        )));
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for (key, value) in outputs {
        writeln!(file, "{}={}", key, value)?;
    }

    debug!(path = %path.display(), count = outputs.len(), "exported outputs");
    Ok(())
}

/// Export the resolved and computed versions
pub fn export_versions(path: &Path, latest_version: &str, new_version: &str) -> Result<()> {
    export_outputs(
        path,
        &[
            (LATEST_VERSION_KEY, latest_version),
            (NEW_VERSION_KEY, new_version),
        ],
    )
}
