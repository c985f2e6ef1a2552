use std::path::PathBuf;

use thiserror::Error;

/// A single captured field could not be converted to its typed form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field} '{raw}'")]
pub struct FieldError {
    pub field: &'static str,
    pub raw: String,
}

impl FieldError {
    pub fn new(field: &'static str, raw: impl Into<String>) -> Self {
        Self {
            field,
            raw: raw.into(),
        }
    }
}

/// An append was refused because its index does not advance the host's maximum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("index {index} is not above the stored maximum {max} for {dest}, record discarded")]
pub struct RejectedIndex {
    pub dest: String,
    pub index: u64,
    pub max: u64,
}

#[derive(Error, Debug)]
pub enum LogError {
    #[error("failed to read log file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read log list {path}: {source}")]
    ListUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
