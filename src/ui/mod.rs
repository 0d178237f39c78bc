//! User interface module - terminal progress output.
//!
//! Release runs are non-interactive; everything shown to the user goes
//! through the functions re-exported here.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_dry_run_summary, display_error, display_release_notes,
    display_status, display_success, display_version_change,
};
