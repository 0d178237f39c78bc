pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod github;
pub mod output;
pub mod publisher;
pub mod resolver;
pub mod ui;

pub use error::{ReleaseError, Result};
