// Human readable renderings of command results.

use crate::constants::HASH_FORMATS;
use crate::core_john::CrackOutcome;
use crate::core_session::SessionInfo;
use crate::core_status::PotSummary;
use crate::core_unshadow::records::SkipReason;
use crate::core_unshadow::MergeReport;
use chrono::{DateTime, Local};
use colored::Colorize;
use std::fmt::Write;

fn timestamp(time: Option<DateTime<Local>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn merge_summary(report: &MergeReport, output: Option<&std::path::Path>) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", "Files combined successfully!".green().bold());
    let _ = writeln!(text, "Combined {} user entries", report.line_count());
    if let Some(output) = output {
        let _ = writeln!(text, "Written to: {}", output.display());
    }
    text
}

/// Lines and accounts that did not make it into the merged file.
pub fn merge_diagnostics(report: &MergeReport) -> String {
    let mut text = String::new();
    for skipped in &report.skipped {
        let SkipReason::TooFewFields { found, required } = skipped.reason;
        let _ = writeln!(
            text,
            "skipped {} line {}: {} fields, {} required",
            skipped.listing, skipped.line_number, found, required
        );
    }
    for username in &report.unmatched_accounts {
        let _ = writeln!(text, "no shadow entry for {}", username);
    }
    text
}

pub fn crack_outcome(outcome: &CrackOutcome) -> String {
    let mut text = String::new();
    if outcome.success {
        let _ = writeln!(text, "{}", "Password cracking completed!".green().bold());
    } else {
        let _ = writeln!(text, "{}", "john reported no success indicator".yellow().bold());
    }
    let _ = writeln!(text, "Cracked {} password(s)", outcome.cracked_count());
    let _ = writeln!(text, "Wordlist: {}", outcome.wordlist_used);
    let _ = writeln!(text, "Format: {}", outcome.format_used);
    text.push('\n');

    if outcome.cracked.is_empty() {
        let _ = writeln!(text, "No passwords cracked with this wordlist.");
    } else {
        let _ = writeln!(text, "Cracked passwords:");
        for entry in &outcome.cracked {
            let _ = writeln!(text, "  {}", entry);
        }
    }
    text
}

pub fn cracked_entries(entries: &[String]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{} cracked entries", entries.len());
    for entry in entries {
        let _ = writeln!(text, "  {}", entry);
    }
    text
}

pub fn formats(available: &[String]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", "Supported Hash Formats".bold());
    text.push('\n');
    let _ = writeln!(text, "Common Linux formats:");
    for (name, description) in HASH_FORMATS {
        let _ = writeln!(text, "  - {}: {}", name.cyan(), description);
    }
    text.push('\n');
    let _ = writeln!(text, "Total formats available: {}", available.len());
    text
}

pub fn john_info(binary: &str, version: &str, format_count: usize) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", "John the Ripper Information".bold());
    text.push('\n');
    let _ = writeln!(text, "Version: {}", version);
    let _ = writeln!(text, "Total formats: {}", format_count);
    let _ = writeln!(text, "Command: {}", binary);
    text
}

pub fn sessions(sessions: &[SessionInfo]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{} ({} total)", "Cracking Sessions".bold(), sessions.len());
    text.push('\n');
    if sessions.is_empty() {
        let _ = writeln!(text, "No sessions found.");
    }
    for session in sessions {
        let _ = writeln!(text, "  - {} ({} bytes)", session.name, session.size_bytes);
    }
    text
}

pub fn session_info(session: &SessionInfo) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", "Session Information".bold());
    text.push('\n');
    let _ = writeln!(text, "Name: {}", session.name);
    let _ = writeln!(text, "Size: {} bytes", session.size_bytes);
    let _ = writeln!(text, "Last modified: {}", timestamp(session.last_modified));
    let _ = writeln!(text, "File: {}", session.path.display());
    text
}

pub fn pot_status(summary: &PotSummary) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", "John the Ripper Status".bold());
    text.push('\n');
    let _ = writeln!(text, "Total cracked: {} passwords", summary.cracked_count);
    let _ = writeln!(text, "Pot file: {}", summary.pot_file.display());
    if summary.exists {
        let _ = writeln!(text, "Last updated: {}", timestamp(summary.last_updated));
    }

    if !summary.recent.is_empty() {
        text.push('\n');
        let _ = writeln!(text, "Recent cracks (last {}):", summary.recent.len());
        for entry in &summary.recent {
            let _ = writeln!(text, "  {}", entry);
        }
    } else {
        text.push('\n');
        let _ = writeln!(text, "{}", summary.message());
    }
    text
}
