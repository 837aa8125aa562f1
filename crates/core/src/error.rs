use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Server error: {0}")]
    Server(String),
}

impl From<walkdir::Error> for ViewerError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        match err.into_io_error() {
            Some(io) if io.kind() == std::io::ErrorKind::PermissionDenied => {
                ViewerError::PermissionDenied { path }
            }
            Some(io) => ViewerError::Io { path, source: io },
            // Only symlink loops get here, and the walk never follows links
            None => ViewerError::Io {
                path,
                source: std::io::Error::other("filesystem loop detected"),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
