// Dictionary attack workflow: validate inputs, stage hashes, run john, collect results.

use crate::config::{Config, WordlistConfig};
use crate::constants::FORMATS_LISTED_IN_ERRORS;
use crate::core_john::error::JohnError;
use crate::core_john::output::SuccessSignal;
use crate::core_john::wrapper::JohnWrapper;
use crate::core_session::{sanitize_session_name, SessionError};
use log::{error, info};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct CrackRequest {
    /// Hash file content in john format, e.g. the output of unshadow.
    pub hash_content: String,
    /// `small`, `medium`, `large` or a path to a wordlist.
    pub wordlist: String,
    pub format: Option<String>,
    pub rules: bool,
    pub session: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CrackOutcome {
    pub success: bool,
    pub signal: Option<SuccessSignal>,
    pub output: String,
    pub cracked: Vec<String>,
    pub wordlist_used: String,
    pub format_used: String,
}

impl CrackOutcome {
    pub fn cracked_count(&self) -> usize {
        self.cracked.len()
    }
}

pub fn validate_wordlist(path: &Path) -> Result<(), JohnError> {
    let metadata = std::fs::metadata(path).map_err(|_| {
        JohnError::InvalidWordlist(format!("File does not exist: {}", path.display()))
    })?;

    if !metadata.is_file() {
        return Err(JohnError::InvalidWordlist(format!(
            "Path is not a file: {}",
            path.display()
        )));
    }
    if metadata.len() == 0 {
        return Err(JohnError::InvalidWordlist(format!(
            "File is empty: {}",
            path.display()
        )));
    }

    Ok(())
}

pub fn validate_hash_format(format: &str, supported: &[String]) -> Result<(), JohnError> {
    if format.is_empty() || supported.iter().any(|known| known == format) {
        return Ok(());
    }

    let listed: Vec<&str> = supported
        .iter()
        .take(FORMATS_LISTED_IN_ERRORS)
        .map(String::as_str)
        .collect();

    Err(JohnError::UnsupportedFormat {
        format: format.to_string(),
        supported: listed.join(", "),
    })
}

pub async fn run_crack(
    config: &Config,
    john: &JohnWrapper,
    request: &CrackRequest,
) -> Result<CrackOutcome, JohnError> {
    info!("Starting crack run with wordlist {}", request.wordlist);

    if let Some(session) = request.session.as_deref() {
        if sanitize_session_name(session).is_empty() {
            return Err(SessionError::InvalidName(session.to_string()).into());
        }
    }

    let wordlist_path = config.wordlists.resolve(&request.wordlist);
    if WordlistConfig::is_preset(&request.wordlist) {
        info!("Using default wordlist: {}", wordlist_path.display());
    } else {
        info!("Using custom wordlist: {}", wordlist_path.display());
    }
    validate_wordlist(&wordlist_path).map_err(|e| {
        error!("Wordlist validation failed: {}", e);
        e
    })?;

    let format = request.format.as_deref().filter(|f| !f.is_empty());
    if let Some(format) = format {
        let supported = john.formats().await?;
        info!("Got {} formats from john", supported.len());
        validate_hash_format(format, &supported)?;
    }

    let mut hash_file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile_in(&config.john.temp_dir)
        .map_err(JohnError::HashFile)?;
    hash_file
        .write_all(request.hash_content.as_bytes())
        .and_then(|_| hash_file.flush())
        .map_err(JohnError::HashFile)?;
    info!("Hash file staged at {}", hash_file.path().display());

    let run = john
        .crack(
            hash_file.path(),
            &wordlist_path,
            format,
            request.session.as_deref(),
            request.rules,
        )
        .await?;

    let cracked = john.show(hash_file.path(), format).await?;
    info!("Cracked count: {}", cracked.len());

    Ok(CrackOutcome {
        success: run.success(),
        signal: run.signal,
        output: run.output,
        cracked,
        wordlist_used: request.wordlist.clone(),
        format_used: format.unwrap_or("auto-detect").to_string(),
    })
}
