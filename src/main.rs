use rouillejtr::config::Config;
use rouillejtr::constants::DEFAULT_CONFIG_PATH;
use rouillejtr::core_cli::{report, Cli, Command, SessionAction};
use rouillejtr::core_john::{run_crack, CrackRequest, JohnWrapper};
use rouillejtr::core_session::SessionStore;
use rouillejtr::{core_status, core_unshadow};
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::{info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };

    // Initialize the logger with a custom format
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "[{}] [{}] {}",
                timestamp,
                record.level(),
                record.args()
            )
        })
        .init();

    let config = load_config(&args.config)?;
    log_config(&config);

    run(args.command, &config).await
}

/// An explicit path must exist; the default path falls back to built-in defaults.
fn load_config(path: &str) -> Result<Config> {
    if path.is_empty() {
        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if !default_path.exists() {
            info!("No configuration at {}, using defaults", DEFAULT_CONFIG_PATH);
            return Ok(Config::default());
        }
        return Config::load_from_file(default_path)
            .with_context(|| format!("Failed to load configuration: {}", DEFAULT_CONFIG_PATH));
    }

    Config::load_from_file(Path::new(path))
        .with_context(|| format!("Failed to load configuration: {}", path))
}

fn log_config(config: &Config) {
    info!("  John Binary: {}", config.john.binary);
    info!("  Sessions Directory: {}", config.john.sessions_dir.display());
    info!("  Temp Directory: {}", config.john.temp_dir.display());
    info!("  Pot File: {}", config.john.pot_file().display());
}

async fn run(command: Command, config: &Config) -> Result<()> {
    let john = JohnWrapper::new(&config.john);

    match command {
        Command::Unshadow {
            passwd,
            shadow,
            output,
            report: with_report,
        } => {
            let merged = core_unshadow::unshadow_files(&passwd, &shadow, output.as_deref())
                .context("Unshadow failed")?;

            match output {
                Some(ref path) => print!("{}", report::merge_summary(&merged, Some(path.as_path()))),
                None => print!("{}", merged.content),
            }
            if with_report {
                eprint!("{}", report::merge_diagnostics(&merged));
            }
        }

        Command::Crack {
            hashes,
            passwd,
            shadow,
            wordlist,
            format,
            rules,
            session,
        } => {
            let hash_content = load_hashes(hashes, passwd, shadow)?;
            let request = CrackRequest {
                hash_content,
                wordlist,
                format,
                rules,
                session,
            };
            let outcome = run_crack(config, &john, &request)
                .await
                .context("Password cracking failed")?;
            print!("{}", report::crack_outcome(&outcome));
        }

        Command::Show { hashes, format } => {
            let entries = john
                .show(&hashes, format.as_deref())
                .await
                .context("Failed to show cracked passwords")?;
            print!("{}", report::cracked_entries(&entries));
        }

        Command::Formats => {
            let formats = john.formats().await.context("Failed to list formats")?;
            print!("{}", report::formats(&formats));
        }

        Command::Info => {
            let version = john
                .version()
                .await
                .unwrap_or_else(|e| format!("Unknown (error: {})", e));
            let format_count = match john.formats().await {
                Ok(formats) => formats.len(),
                Err(e) => {
                    warn!("Could not list formats: {}", e);
                    0
                }
            };
            print!("{}", report::john_info(john.binary(), &version, format_count));
        }

        Command::Status => {
            let summary = core_status::pot_status(&config.john.pot_file())?;
            print!("{}", report::pot_status(&summary));
        }

        Command::Session { action } => {
            let store = SessionStore::new(config.john.sessions_dir.clone());
            match action {
                SessionAction::List => print!("{}", report::sessions(&store.list()?)),
                SessionAction::Delete { name } => {
                    store.delete(&name)?;
                    println!("Session '{}' deleted successfully", name);
                }
                SessionAction::Info { name } => {
                    print!("{}", report::session_info(&store.info(&name)?))
                }
            }
        }
    }

    Ok(())
}

/// Hash content either from a ready hash file or merged from passwd/shadow.
fn load_hashes(
    hashes: Option<PathBuf>,
    passwd: Option<PathBuf>,
    shadow: Option<PathBuf>,
) -> Result<String> {
    match (hashes, passwd, shadow) {
        (Some(hashes), _, _) => std::fs::read_to_string(&hashes)
            .with_context(|| format!("Failed to read hash file: {}", hashes.display())),
        (None, Some(passwd), Some(shadow)) => {
            let merged = core_unshadow::unshadow_files(&passwd, &shadow, None)
                .context("Unshadow failed")?;
            info!("Combined {} user entries for cracking", merged.line_count());
            Ok(merged.content)
        }
        _ => anyhow::bail!("Either --hashes or both --passwd and --shadow are required"),
    }
}
