//! Registry of existing site configurations.
//!
//! # Responsibilities
//! - Enumerate documents in the sites-available directory
//! - Extract the `root` and `listen` directives by pattern match
//! - Answer port-conflict probes for the writer
//!
//! # Design Decisions
//! - A missing or unreadable directory yields an empty listing, not an
//!   error, so callers degrade gracefully
//! - Entries are sorted by name; directory iteration order is not stable
//!   enough to expose
//! - The extractor is deliberately limited to the two known directives
//!   and never grows into a config-grammar parser

use std::fs;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sites::types::ConfigEntry;

pub(crate) static ROOT_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"root\s+([^;]+);").expect("root directive pattern"));

pub(crate) static LISTEN_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"listen\s+(\d+);").expect("listen directive pattern"));

/// Read-only view over the sites-available directory.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    dir: PathBuf,
}

impl SiteRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// List all configurations, sorted by name.
    ///
    /// Hidden files and non-files are skipped. A document whose directives
    /// are missing (or which cannot be read) still appears, with blank
    /// root/port values.
    pub fn list(&self) -> Vec<ConfigEntry> {
        let mut entries = Vec::new();

        let dir = match fs::read_dir(&self.dir) {
            Ok(dir) => dir,
            Err(e) => {
                tracing::debug!(
                    dir = %self.dir.display(),
                    error = %e,
                    "Configuration directory is missing or unreadable"
                );
                return entries;
            }
        };

        for entry in dir.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let content = fs::read_to_string(&path).unwrap_or_default();
            entries.push(ConfigEntry {
                root: ROOT_DIRECTIVE
                    .captures(&content)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default(),
                port: LISTEN_DIRECTIVE
                    .captures(&content)
                    .and_then(|c| c.get(1))
                    .and_then(|m| m.as_str().parse().ok()),
                name,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// True when another configuration already listens on `port`.
    ///
    /// The entry named `exclude` is skipped so an update can keep its own
    /// port. Entries with a blank port never match.
    pub fn is_port_in_use(&self, port: u16, exclude: Option<&str>) -> bool {
        self.list()
            .iter()
            .filter(|entry| exclude != Some(entry.name.as_str()))
            .any(|entry| entry.port == Some(port))
    }
}
