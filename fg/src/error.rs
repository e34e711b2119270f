//! FlowGen error types

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for generator operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can occur while generating files
#[derive(Debug, Error)]
pub enum GenError {
    #[error("please provide {}", quote_flags(.missing))]
    Usage { missing: Vec<&'static str> },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Output directory {0} does not exist or is not a directory")]
    OutputDir(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move generated file into {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this is a usage error (missing required names)
    pub fn is_usage(&self) -> bool {
        matches!(self, GenError::Usage { .. })
    }
}

fn quote_flags(missing: &[&'static str]) -> String {
    let quoted: Vec<String> = missing.iter().map(|m| format!("'--{}'", m)).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
