//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from config
//! files, and every section has defaults so a minimal file works.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the site administration service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,

    /// Filesystem locations the service manages.
    pub paths: PathsConfig,

    /// Authentication settings.
    pub auth: AuthConfig,

    /// External command configuration.
    pub commands: CommandsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8081").
    pub bind_address: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8081".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Managed filesystem locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding configuration documents.
    pub sites_available: PathBuf,

    /// Directory holding activation links.
    pub sites_enabled: PathBuf,

    /// Root offered by the directory browser.
    pub browse_root: PathBuf,

    /// Configuration names that can never be deleted or modified.
    pub protected: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sites_available: PathBuf::from("/etc/nginx/sites-available"),
            sites_enabled: PathBuf::from("/etc/nginx/sites-enabled"),
            browse_root: PathBuf::from("/var/www/html"),
            protected: vec!["default".to_string()],
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Require a session token on administrative routes.
    pub enabled: bool,

    /// The only account accepted at login.
    pub admin_user: String,

    /// Session lifetime in seconds.
    pub session_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            admin_user: "root".to_string(),
            session_ttl_secs: 2 * 3600,
        }
    }
}

/// External command configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Syntax-validation command (exit 0 = valid).
    pub validate: Vec<String>,

    /// Server reload command (exit 0 = applied).
    pub reload: Vec<String>,

    /// Deadline for either command in seconds.
    pub timeout_secs: u64,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            validate: vec!["nginx".to_string(), "-t".to_string()],
            reload: vec![
                "systemctl".to_string(),
                "reload".to_string(),
                "nginx".to_string(),
            ],
            timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
