//! Shared utilities for integration testing.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use nginx_site_admin::auth::CredentialVerifier;
use nginx_site_admin::system::command::{CommandError, CommandOutput, CommandRunner};

/// Temporary sites-available / sites-enabled / webroot layout.
pub struct SiteDirs {
    #[allow(dead_code)]
    pub root: TempDir,
    pub available: PathBuf,
    pub enabled: PathBuf,
    pub webroot: PathBuf,
}

pub fn site_dirs() -> SiteDirs {
    let root = tempfile::tempdir().expect("create temp dir");
    let available = root.path().join("sites-available");
    let enabled = root.path().join("sites-enabled");
    let webroot = root.path().join("webroot");
    for dir in [&available, &enabled, &webroot] {
        std::fs::create_dir(dir).expect("create fixture dir");
    }
    SiteDirs {
        root,
        available,
        enabled,
        webroot,
    }
}

/// Command runner that replays scripted results and records invocations.
pub struct ScriptedRunner {
    #[allow(dead_code)]
    pub calls: Mutex<Vec<String>>,
    results: Mutex<VecDeque<Result<CommandOutput, CommandError>>>,
}

impl ScriptedRunner {
    #[allow(dead_code)]
    pub fn new(results: Vec<Result<CommandOutput, CommandError>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            results: Mutex::new(results.into()),
        }
    }

    #[allow(dead_code)]
    pub fn exit(status: i32, output: &str) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput {
            status: Some(status),
            output: output.to_string(),
        })
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        _stdin: Option<&str>,
    ) -> Result<CommandOutput, CommandError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{program} {}", args.join(" ")));
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ScriptedRunner::exit(0, ""))
    }
}

/// Verifier that accepts exactly one username/password pair.
#[allow(dead_code)]
pub struct FixedVerifier {
    pub username: String,
    pub password: String,
}

#[async_trait]
impl CredentialVerifier for FixedVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, CommandError> {
        Ok(username == self.username && password == self.password)
    }
}
