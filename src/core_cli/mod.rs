pub mod core_cli;
pub mod report;

pub use core_cli::{Cli, Command, SessionAction};
