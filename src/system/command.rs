//! External process execution capability.
//!
//! # Design Decisions
//! - Process execution is a trait so the reload orchestrator and the
//!   credential verifier can be tested without touching a real shell
//! - Output is captured as one combined stdout-then-stderr string, which
//!   is what failure messages surface
//! - Every invocation is bounded by a timeout; the original tooling this
//!   replaces could hang forever on a stuck reload

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Captured result of one finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code, when the process exited normally.
    pub status: Option<i32>,
    /// Combined stdout and stderr.
    pub output: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Errors that prevent a command from producing an exit status.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The process could not be started or awaited.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exceeded the configured deadline and was killed.
    #[error("{program} did not finish within {timeout_secs} seconds")]
    TimedOut { program: String, timeout_secs: u64 },
}

/// Capability to run an external command and capture its output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<&str>,
    ) -> Result<CommandOutput, CommandError>;
}

/// Production runner backed by `tokio::process` with a bounded wait.
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<&str>,
    ) -> Result<CommandOutput, CommandError> {
        let mut command = tokio::process::Command::new(program);
        command
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

        if let Some(input) = stdin {
            if let Some(mut handle) = child.stdin.take() {
                // The child may exit before reading everything; that is its
                // answer, not ours to report.
                let _ = handle.write_all(input.as_bytes()).await;
                let _ = handle.shutdown().await;
            }
        }

        let waited = tokio::time::timeout(self.timeout, child.wait_with_output()).await;
        match waited {
            Ok(Ok(output)) => {
                let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&output.stderr));
                Ok(CommandOutput {
                    status: output.status.code(),
                    output: combined,
                })
            }
            Ok(Err(source)) => Err(CommandError::Spawn {
                program: program.to_string(),
                source,
            }),
            Err(_) => Err(CommandError::TimedOut {
                program: program.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_requires_zero_status() {
        let ok = CommandOutput {
            status: Some(0),
            output: String::new(),
        };
        let failed = CommandOutput {
            status: Some(1),
            output: String::new(),
        };
        let killed = CommandOutput {
            status: None,
            output: String::new(),
        };
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }

    #[test]
    fn test_error_display() {
        let err = CommandError::TimedOut {
            program: "nginx".into(),
            timeout_secs: 30,
        };
        assert_eq!(err.to_string(), "nginx did not finish within 30 seconds");
    }
}
