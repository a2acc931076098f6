//! Companion tooling for John the Ripper: merges passwd and shadow listings
//! into a crackable file and drives the `john` binary for cracking runs,
//! session files and pot file status.

pub mod config;
pub mod constants;
pub mod core_cli;
pub mod core_john;
pub mod core_session;
pub mod core_status;
pub mod core_unshadow;
