// Errors for the passwd/shadow merge
use std::fmt;
use thiserror::Error;

/// Which of the two listings a diagnostic or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Account,
    Secret,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listing::Account => write!(f, "passwd"),
            Listing::Secret => write!(f, "shadow"),
        }
    }
}

#[derive(Error, Debug)]
pub enum UnshadowError {
    #[error("No matching users found between passwd and shadow files")]
    NoMatchingUsers,

    #[error("The {listing} listing is not valid UTF-8")]
    InvalidEncoding { listing: Listing },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl UnshadowError {
    /// True for the domain failure, false for internal errors.
    pub fn is_no_match(&self) -> bool {
        matches!(self, UnshadowError::NoMatchingUsers)
    }
}
