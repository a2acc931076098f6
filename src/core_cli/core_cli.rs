use crate::constants::DEFAULT_SESSION_NAME;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "rouillejtr",
    about = "Unshadow, crack and session tooling around John the Ripper."
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "")]
    pub config: String,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Combine passwd and shadow files into a john-ready hash file
    Unshadow {
        /// passwd file
        #[arg(long)]
        passwd: PathBuf,

        /// shadow file
        #[arg(long)]
        shadow: PathBuf,

        /// Write the combined file here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List skipped lines and accounts without a shadow entry
        #[arg(long)]
        report: bool,
    },

    /// Run a dictionary attack with john
    Crack {
        /// Hash file in john format
        #[arg(long, required_unless_present = "passwd", conflicts_with = "passwd")]
        hashes: Option<PathBuf>,

        /// passwd file to unshadow before cracking
        #[arg(long, requires = "shadow")]
        passwd: Option<PathBuf>,

        /// shadow file to unshadow before cracking
        #[arg(long, requires = "passwd")]
        shadow: Option<PathBuf>,

        /// small, medium, large or a path to a wordlist
        #[arg(short, long, default_value = "small")]
        wordlist: String,

        /// Hash format, auto-detected by john when omitted
        #[arg(short, long)]
        format: Option<String>,

        /// Apply word mangling rules
        #[arg(long)]
        rules: bool,

        /// Name of the john session to record
        #[arg(short, long)]
        session: Option<String>,
    },

    /// Show already cracked entries of a hash file
    Show {
        #[arg(long)]
        hashes: PathBuf,

        #[arg(short, long)]
        format: Option<String>,
    },

    /// List supported hash formats
    Formats,

    /// Show information about the john installation
    Info,

    /// Count cracked passwords in the pot file
    Status,

    /// Manage john sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum SessionAction {
    List,
    Delete {
        #[arg(default_value = DEFAULT_SESSION_NAME)]
        name: String,
    },
    Info {
        #[arg(default_value = DEFAULT_SESSION_NAME)]
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_unshadow() {
        let cli = Cli::try_parse_from([
            "rouillejtr", "unshadow", "--passwd", "/etc/passwd", "--shadow", "/etc/shadow", "-o", "out.txt",
        ])
        .unwrap();
        match cli.command {
            Command::Unshadow { passwd, output, report, .. } => {
                assert_eq!(passwd, PathBuf::from("/etc/passwd"));
                assert_eq!(output, Some(PathBuf::from("out.txt")));
                assert!(!report);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_crack_needs_a_hash_source() {
        assert!(Cli::try_parse_from(["rouillejtr", "crack"]).is_err());
        assert!(Cli::try_parse_from(["rouillejtr", "crack", "--passwd", "p"]).is_err());
        assert!(Cli::try_parse_from(["rouillejtr", "crack", "--hashes", "h", "--passwd", "p", "--shadow", "s"]).is_err());

        let cli = Cli::try_parse_from(["rouillejtr", "crack", "--passwd", "p", "--shadow", "s"]).unwrap();
        match cli.command {
            Command::Crack { wordlist, hashes, .. } => {
                assert_eq!(wordlist, "small");
                assert!(hashes.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_session_default_name() {
        let cli = Cli::try_parse_from(["rouillejtr", "session", "info"]).unwrap();
        match cli.command {
            Command::Session { action: SessionAction::Info { name } } => assert_eq!(name, "default"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
