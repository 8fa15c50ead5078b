//! Site configuration entries and error definitions.

use serde::Serialize;
use thiserror::Error;

/// One configuration document as seen by the registry.
///
/// `root` and `port` come from the two known directives; either is blank
/// (`""` / `None`) when the directive is absent or unparseable, which is
/// not an error at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    /// Document filename, doubling as the configuration identifier.
    pub name: String,

    /// Value of the first `root` directive, trimmed.
    pub root: String,

    /// Value of the first numeric `listen` directive.
    pub port: Option<u16>,
}

/// Errors that can occur while managing site configurations.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A request field failed shape validation.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The requested path is not an existing directory.
    #[error("{0} is not an existing directory")]
    InvalidPath(String),

    /// Another configuration already listens on this port.
    #[error("port {0} is already used by another configuration")]
    PortConflict(u16),

    /// No document with this name exists.
    #[error("configuration {0} does not exist")]
    NotFound(String),

    /// The name is on the protected list and cannot be changed or removed.
    #[error("configuration {0} is protected and cannot be modified")]
    Protected(String),

    /// Writing (or rewriting) the document failed.
    #[error("failed to write configuration {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Removing the document failed.
    #[error("failed to delete configuration {name}: {source}")]
    Delete {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Creating or removing the activation link failed.
    #[error("failed to update activation link for {name}: {source}")]
    Link {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The listen substitution left the document unchanged. The directive
    /// is either missing or already set to the requested port; the two
    /// cases are indistinguishable and both report as this failure.
    #[error("no listen directive was updated (missing or already set to the requested port)")]
    NoChange,
}

/// Result type for site configuration operations.
pub type SiteResult<T> = Result<T, SiteError>;
