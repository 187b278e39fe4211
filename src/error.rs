use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("cannot load master image {}: {source}", .path.display())]
    SourceLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to resize to {size}x{size}: {message}")]
    Resize { size: u32, message: String },

    #[error("failed to serialize report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
