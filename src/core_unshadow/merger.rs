// Combines a passwd listing with its shadow listing into a john-ready file.

use crate::core_unshadow::error::{Listing, UnshadowError};
use crate::core_unshadow::records::{is_ignorable_line, AccountRecord, SecretRecord, SkippedLine};
use indexmap::IndexMap;
use log::{debug, info};
use std::path::Path;

/// Result of a merge along with what was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Merged listing, one line per user, newline terminated.
    pub content: String,
    pub merged_users: Vec<String>,
    /// Valid passwd accounts with no shadow entry.
    pub unmatched_accounts: Vec<String>,
    pub skipped: Vec<SkippedLine>,
}

impl MergeReport {
    pub fn line_count(&self) -> usize {
        self.merged_users.len()
    }
}

/// Merges the two listings, ignoring malformed lines.
pub fn merge(passwd: &str, shadow: &str) -> Result<String, UnshadowError> {
    merge_with_report(passwd, shadow).map(|report| report.content)
}

/// Same as [`merge`] for raw bytes; rejects listings that are not UTF-8.
pub fn merge_bytes(passwd: &[u8], shadow: &[u8]) -> Result<String, UnshadowError> {
    let (passwd, shadow) = decode_listings(passwd, shadow)?;
    merge(passwd, shadow)
}

/// Merges the two listings and keeps a record of every dropped line.
pub fn merge_with_report(passwd: &str, shadow: &str) -> Result<MergeReport, UnshadowError> {
    let mut skipped = Vec::new();
    let accounts = parse_accounts(passwd, &mut skipped);
    let secrets = parse_secrets(shadow, &mut skipped);

    let mut lines = Vec::new();
    let mut merged_users = Vec::new();
    let mut unmatched_accounts = Vec::new();

    for (username, record) in &accounts {
        match secrets.get(username) {
            Some(hash) => {
                lines.push(record.with_secret(hash));
                merged_users.push(username.to_string());
            }
            None => {
                debug!("No shadow entry for user {}", username);
                unmatched_accounts.push(username.to_string());
            }
        }
    }

    if lines.is_empty() {
        return Err(UnshadowError::NoMatchingUsers);
    }

    let mut content = lines.join("\n");
    content.push('\n');

    Ok(MergeReport {
        content,
        merged_users,
        unmatched_accounts,
        skipped,
    })
}

/// Reads both files, merges them and writes the result to `output` if given.
pub fn unshadow_files(
    passwd_path: &Path,
    shadow_path: &Path,
    output: Option<&Path>,
) -> Result<MergeReport, UnshadowError> {
    let passwd = read_listing(passwd_path)?;
    let shadow = read_listing(shadow_path)?;
    let (passwd, shadow) = decode_listings(&passwd, &shadow)?;

    let report = merge_with_report(passwd, shadow)?;

    if let Some(output) = output {
        std::fs::write(output, &report.content).map_err(|source| UnshadowError::Io {
            path: output.display().to_string(),
            source,
        })?;
        info!("Combined file created: {}", output.display());
    }

    Ok(report)
}

fn read_listing(path: &Path) -> Result<Vec<u8>, UnshadowError> {
    std::fs::read(path).map_err(|source| UnshadowError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn decode_listings<'a>(
    passwd: &'a [u8],
    shadow: &'a [u8],
) -> Result<(&'a str, &'a str), UnshadowError> {
    let passwd = std::str::from_utf8(passwd).map_err(|_| UnshadowError::InvalidEncoding {
        listing: Listing::Account,
    })?;
    let shadow = std::str::from_utf8(shadow).map_err(|_| UnshadowError::InvalidEncoding {
        listing: Listing::Secret,
    })?;
    Ok((passwd, shadow))
}

/// Record lines with their 1-based line numbers.
fn record_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !is_ignorable_line(line))
}

fn parse_accounts<'a>(
    text: &'a str,
    skipped: &mut Vec<SkippedLine>,
) -> IndexMap<&'a str, AccountRecord<'a>> {
    let mut accounts = IndexMap::new();
    for (line_number, line) in record_lines(text) {
        match AccountRecord::from_line(line) {
            // A repeated username keeps its first position.
            Some(record) => {
                accounts.insert(record.username(), record);
            }
            None => {
                debug!("Skipping passwd line {}: too few fields", line_number);
                skipped.push(SkippedLine::too_few_fields(Listing::Account, line_number, line));
            }
        }
    }
    accounts
}

fn parse_secrets<'a>(text: &'a str, skipped: &mut Vec<SkippedLine>) -> IndexMap<&'a str, &'a str> {
    let mut secrets = IndexMap::new();
    for (line_number, line) in record_lines(text) {
        match SecretRecord::from_line(line) {
            Some(record) => {
                secrets.insert(record.username, record.secret_hash);
            }
            None => {
                debug!("Skipping shadow line {}: too few fields", line_number);
                skipped.push(SkippedLine::too_few_fields(Listing::Secret, line_number, line));
            }
        }
    }
    secrets
}
