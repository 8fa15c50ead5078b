//! Credential verification against the system account.

use std::sync::Arc;

use async_trait::async_trait;

use crate::system::command::{CommandError, CommandRunner};

/// Boolean oracle deciding whether credentials authorize administration.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, CommandError>;
}

/// Verifier that tests the password by piping it to `su -c true`.
///
/// Only the configured administrative user is ever accepted; any other
/// username is rejected without running a process.
pub struct SuCredentialVerifier {
    runner: Arc<dyn CommandRunner>,
    admin_user: String,
}

impl SuCredentialVerifier {
    pub fn new(runner: Arc<dyn CommandRunner>, admin_user: impl Into<String>) -> Self {
        Self {
            runner,
            admin_user: admin_user.into(),
        }
    }
}

#[async_trait]
impl CredentialVerifier for SuCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, CommandError> {
        if username != self.admin_user {
            tracing::debug!(username, "Rejected login for non-administrative user");
            return Ok(false);
        }

        let args = vec!["-c".to_string(), "true".to_string()];
        let input = format!("{password}\n");
        let result = self.runner.run("su", &args, Some(&input)).await?;
        Ok(result.success())
    }
}
