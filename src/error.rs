use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GomiiError>;

#[derive(Error, Debug)]
pub enum GomiiError {
    #[error("Failed to download package: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to save package: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing package data: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid package name: '{name}'")]
    InvalidPackageName { name: String },

    #[error("Failed to initialize HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },
}

impl GomiiError {
    pub fn invalid_package_name<S: Into<String>>(name: S) -> Self {
        GomiiError::InvalidPackageName { name: name.into() }
    }

    /// Destination file the failure relates to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            GomiiError::Save { path, .. } | GomiiError::Write { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
