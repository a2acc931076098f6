// Bookkeeping for john's `.rec` restore files

pub mod error;
pub mod store;

pub use error::SessionError;
pub use store::{sanitize_session_name, SessionInfo, SessionStore};
