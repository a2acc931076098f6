use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session '{0}' not found")]
    NotFound(String),

    #[error("Invalid session name: {0:?}")]
    InvalidName(String),

    #[error("Failed to access session storage {path}: {source}")]
    Storage {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
