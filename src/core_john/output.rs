// Interpretation of john's text output.
//
// john reports most outcomes only as free text, so these helpers decide what
// a run meant. They are kept free of I/O so they can be tested directly.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Which indicator marked a crack run as successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessSignal {
    HashCracked,
    SessionCompleted,
    NothingLeft,
    GuessCount,
    ExitStatus,
}

impl fmt::Display for SuccessSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SuccessSignal::HashCracked => "password hash cracked",
            SuccessSignal::SessionCompleted => "session completed",
            SuccessSignal::NothingLeft => "no hashes left to crack",
            SuccessSignal::GuessCount => "guess counter",
            SuccessSignal::ExitStatus => "exit status 0",
        };
        write!(f, "{}", text)
    }
}

fn guess_count_regex() -> Option<&'static Regex> {
    static GUESSES: OnceLock<Option<Regex>> = OnceLock::new();
    GUESSES.get_or_init(|| Regex::new(r"\d+g ").ok()).as_ref()
}

/// Checks the combined stdout/stderr of a crack run, strongest signal first.
pub fn detect_success(output: &str, exit_ok: bool) -> Option<SuccessSignal> {
    let lower = output.to_lowercase();

    if lower.contains("password hash cracked") {
        Some(SuccessSignal::HashCracked)
    } else if lower.contains("session completed") {
        Some(SuccessSignal::SessionCompleted)
    } else if lower.contains("no password hashes left to crack") {
        Some(SuccessSignal::NothingLeft)
    } else if guess_count_regex().is_some_and(|re| re.is_match(output)) {
        Some(SuccessSignal::GuessCount)
    } else if exit_ok {
        Some(SuccessSignal::ExitStatus)
    } else {
        None
    }
}

/// Parses `john --list=formats`, which is comma separated on most builds.
pub fn parse_formats(output: &str) -> Vec<String> {
    let output = output.trim();

    if output.contains(',') {
        return output
            .split(',')
            .map(|fmt| fmt.split('(').next().unwrap_or_default().trim())
            .filter(|fmt| !fmt.is_empty())
            .map(str::to_string)
            .collect();
    }

    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Keeps the `user:password...` lines of `john --show`, dropping its summary.
pub fn parse_show_output(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            !(lower.contains("password") && lower.contains("cracked"))
        })
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains(':'))
        .map(str::to_string)
        .collect()
}

pub fn first_line(output: &str) -> String {
    output.lines().next().unwrap_or_default().to_string()
}
