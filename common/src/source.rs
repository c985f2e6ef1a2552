//! Log-list input.
//!
//! A log list is a plain text file with one log path per line. The final path
//! component names the destination, so `logs/192.0.2.1` is the log for
//! `192.0.2.1`. Names with an extension (`192.0.2.1.log`) are taken verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::LogError;

/// A log file and the destination it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSource {
    pub path: PathBuf,
    pub dest: String,
}

impl LogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let dest: String = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, dest }
    }
}

/// Parses the content of a log list. Blank lines are skipped.
pub fn parse_log_list(content: &str) -> Vec<LogSource> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(LogSource::new)
        .collect()
}

/// Reads and parses a log list file.
///
/// An empty list is not an error; it is reported and yields no sources.
pub fn read_log_list(path: &Path) -> Result<Vec<LogSource>, LogError> {
    let content: String = fs::read_to_string(path).map_err(|source| LogError::ListUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let sources: Vec<LogSource> = parse_log_list(&content);
    if sources.is_empty() {
        warn!("log list {} is empty", path.display());
    }
    Ok(sources)
}
