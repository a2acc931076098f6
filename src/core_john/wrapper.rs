use crate::config::JohnConfig;
use crate::core_john::error::JohnError;
use crate::core_john::output::{detect_success, first_line, parse_formats, parse_show_output, SuccessSignal};
use crate::core_session::SessionStore;
use log::{debug, error, info};
use std::ffi::OsString;
use std::path::Path;
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

/// Outcome of a single `john --wordlist` invocation.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub signal: Option<SuccessSignal>,
    /// stdout followed by stderr.
    pub output: String,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.signal.is_some()
    }
}

/// Runs john subcommands with per-command timeouts.
#[derive(Debug, Clone)]
pub struct JohnWrapper {
    binary: String,
    sessions: SessionStore,
    formats_timeout: Duration,
    crack_timeout: Duration,
    show_timeout: Duration,
    version_timeout: Duration,
}

impl JohnWrapper {
    pub fn new(config: &JohnConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            sessions: SessionStore::new(config.sessions_dir.clone()),
            formats_timeout: Duration::from_secs(config.formats_timeout_secs),
            crack_timeout: config.crack_timeout(),
            show_timeout: Duration::from_secs(config.show_timeout_secs),
            version_timeout: Duration::from_secs(config.version_timeout_secs),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Formats supported by the installed john build.
    pub async fn formats(&self) -> Result<Vec<String>, JohnError> {
        let args = vec![OsString::from("--list=formats")];
        let output = self.run(&args, self.formats_timeout).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            error!("get formats failed with {}: {}", output.status, stderr);
            return Err(JohnError::CommandFailed {
                command: self.describe(&args),
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("Formats output (first 500 chars): {}", truncate(&stdout, 500));
        Ok(parse_formats(&stdout))
    }

    pub async fn crack(
        &self,
        hash_file: &Path,
        wordlist: &Path,
        format: Option<&str>,
        session: Option<&str>,
        rules: bool,
    ) -> Result<RunResult, JohnError> {
        let args = self.crack_args(hash_file, wordlist, format, session, rules);
        // john keeps what it cracked in the pot file, so a timeout still has results to show.
        let output = match self.run(&args, self.crack_timeout).await {
            Err(JohnError::Timeout { secs, .. }) => {
                return Ok(RunResult {
                    signal: None,
                    output: format!("Command timed out after {} seconds", secs),
                });
            }
            other => other?,
        };

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        info!("john exited with {}", output.status);
        debug!("Full output: {}", combined);

        let signal = detect_success(&combined, output.status.success());
        match signal {
            Some(signal) => info!("Crack run succeeded: {}", signal),
            None => info!("Crack run reported no success indicator"),
        }

        Ok(RunResult {
            signal,
            output: combined,
        })
    }

    /// Cracked entries for `hash_file`, as printed by `john --show`.
    pub async fn show(&self, hash_file: &Path, format: Option<&str>) -> Result<Vec<String>, JohnError> {
        let mut args = vec![OsString::from("--show"), hash_file.as_os_str().to_owned()];
        if let Some(format) = format {
            args.push(OsString::from(format!("--format={}", format)));
        }

        let output = self.run(&args, self.show_timeout).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("Show output: {}", stdout);
        Ok(parse_show_output(&stdout))
    }

    pub async fn version(&self) -> Result<String, JohnError> {
        let args = vec![OsString::from("--help")];
        let output = self.run(&args, self.version_timeout).await?;
        Ok(first_line(&String::from_utf8_lossy(&output.stdout)))
    }

    fn crack_args(
        &self,
        hash_file: &Path,
        wordlist: &Path,
        format: Option<&str>,
        session: Option<&str>,
        rules: bool,
    ) -> Vec<OsString> {
        let mut wordlist_arg = OsString::from("--wordlist=");
        wordlist_arg.push(wordlist.as_os_str());

        let mut args = vec![wordlist_arg, hash_file.as_os_str().to_owned()];

        if let Some(format) = format {
            args.push(OsString::from(format!("--format={}", format)));
        }

        if let Some(session) = session {
            let mut session_arg = OsString::from("--session=");
            session_arg.push(self.sessions.session_path(session).as_os_str());
            args.push(session_arg);
        }

        if rules {
            args.push(OsString::from("--rules"));
        }

        args
    }

    async fn run(&self, args: &[OsString], limit: Duration) -> Result<Output, JohnError> {
        let command = self.describe(args);
        info!("Executing command: {}", command);

        let mut cmd = Command::new(&self.binary);
        cmd.args(args).kill_on_drop(true);

        match tokio::time::timeout(limit, cmd.output()).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(source)) => {
                error!("Failed to run {}: {}", self.binary, source);
                Err(JohnError::Spawn {
                    binary: self.binary.clone(),
                    source,
                })
            }
            Err(_) => {
                error!("Command timed out after {} seconds", limit.as_secs());
                Err(JohnError::Timeout {
                    command,
                    secs: limit.as_secs(),
                })
            }
        }
    }

    fn describe(&self, args: &[OsString]) -> String {
        let mut parts = vec![self.binary.clone()];
        parts.extend(args.iter().map(|arg| arg.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
