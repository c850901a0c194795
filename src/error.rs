use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UscGetError>;

#[derive(Error, Debug)]
pub enum UscGetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GET {url} returned HTTP {status}")]
    Network { url: String, status: u16 },

    #[error("could not find the bulk XML ZIP link on the download page; response began with:\n{snippet}")]
    LinkNotFound { snippet: String },

    #[error("not a readable ZIP archive: {path} ({message})")]
    Archive { path: PathBuf, message: String },

    #[error("could not determine the program's own directory")]
    ExeDirectoryNotFound,

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}
