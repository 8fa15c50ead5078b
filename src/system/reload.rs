//! Validate-then-reload orchestration for the web server.

use std::sync::Arc;

use thiserror::Error;

use crate::system::command::{CommandError, CommandOutput, CommandRunner};

/// Errors from the external validate/reload command pair.
#[derive(Debug, Error)]
pub enum ReloadError {
    /// The syntax-validation command failed; the running configuration is
    /// untouched.
    #[error("configuration validation failed: {output}")]
    Validation { output: String },

    /// Validation passed but the reload command failed.
    #[error("server reload failed: {output}")]
    Reload { output: String },
}

pub type ReloadResult<T> = Result<T, ReloadError>;

/// Runs the fixed validate and reload commands through an injected runner.
pub struct ReloadOrchestrator {
    runner: Arc<dyn CommandRunner>,
    validate: Vec<String>,
    reload: Vec<String>,
}

impl ReloadOrchestrator {
    pub fn new(runner: Arc<dyn CommandRunner>, validate: Vec<String>, reload: Vec<String>) -> Self {
        Self {
            runner,
            validate,
            reload,
        }
    }

    /// Validate the configuration set, then reload the server.
    ///
    /// Fails fast on validation so a broken document can never be pushed
    /// live; no document is modified either way.
    pub async fn reload(&self) -> ReloadResult<()> {
        tracing::info!("Validating web server configuration");
        let validation = self
            .invoke(&self.validate)
            .await
            .map_err(|e| ReloadError::Validation {
                output: e.to_string(),
            })?;
        if !validation.success() {
            tracing::error!(output = %validation.output.trim(), "Configuration validation failed");
            return Err(ReloadError::Validation {
                output: validation.output.trim().to_string(),
            });
        }

        tracing::info!("Reloading web server");
        let reload = self
            .invoke(&self.reload)
            .await
            .map_err(|e| ReloadError::Reload {
                output: e.to_string(),
            })?;
        if !reload.success() {
            tracing::error!(output = %reload.output.trim(), "Server reload failed");
            return Err(ReloadError::Reload {
                output: reload.output.trim().to_string(),
            });
        }

        tracing::info!("Web server reloaded");
        Ok(())
    }

    async fn invoke(&self, command: &[String]) -> Result<CommandOutput, CommandError> {
        let Some((program, args)) = command.split_first() else {
            return Err(CommandError::Spawn {
                program: "<empty>".to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "empty command line",
                ),
            });
        };
        self.runner.run(program, args, None).await
    }
}
