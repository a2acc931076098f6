// Errors raised while driving the john binary
use crate::core_session::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JohnError {
    #[error("Failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command timed out after {secs} seconds: {command}")]
    Timeout { command: String, secs: u64 },

    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Wordlist error: {0}")]
    InvalidWordlist(String),

    #[error("Unsupported format: {format}. Use one of: {supported}...")]
    UnsupportedFormat { format: String, supported: String },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Failed to stage hash file: {0}")]
    HashFile(#[source] std::io::Error),
}
