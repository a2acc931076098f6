// Summary of john's pot file: how many hashes have been cracked so far.

use crate::constants::RECENT_CRACKS_SHOWN;
use chrono::{DateTime, Local};
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Failed to read pot file {path}: {source}")]
    PotRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct PotSummary {
    pub pot_file: PathBuf,
    pub exists: bool,
    pub cracked_count: usize,
    pub size_bytes: u64,
    pub last_updated: Option<DateTime<Local>>,
    /// The last few entries, oldest first.
    pub recent: Vec<String>,
}

impl PotSummary {
    pub fn message(&self) -> String {
        if self.cracked_count == 0 {
            "No passwords cracked yet".to_string()
        } else {
            format!("Total cracked: {} passwords", self.cracked_count)
        }
    }
}

fn pot_entries(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn pot_status(pot_file: &Path) -> Result<PotSummary, StatusError> {
    if !pot_file.exists() {
        info!("No pot file found at {}", pot_file.display());
        return Ok(PotSummary {
            pot_file: pot_file.to_path_buf(),
            exists: false,
            cracked_count: 0,
            size_bytes: 0,
            last_updated: None,
            recent: Vec::new(),
        });
    }

    let read_error = |source| StatusError::PotRead {
        path: pot_file.display().to_string(),
        source,
    };
    let content = std::fs::read_to_string(pot_file).map_err(read_error)?;
    let metadata = std::fs::metadata(pot_file).map_err(read_error)?;

    let entries = pot_entries(&content);
    let skip = entries.len().saturating_sub(RECENT_CRACKS_SHOWN);
    info!("Found {} cracked passwords", entries.len());

    Ok(PotSummary {
        pot_file: pot_file.to_path_buf(),
        exists: true,
        cracked_count: entries.len(),
        size_bytes: metadata.len(),
        last_updated: metadata.modified().ok().map(DateTime::<Local>::from),
        recent: entries[skip..].iter().map(|s| s.to_string()).collect(),
    })
}
