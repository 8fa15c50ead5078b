//! Site configuration persistence.
//!
//! # Responsibilities
//! - Validate and sanitize save/delete/update requests
//! - Render and write configuration documents into sites-available
//! - Toggle activation by (re)creating the sites-enabled symlink
//! - Rewrite the listen directive on port updates
//!
//! # Design Decisions
//! - Directories are injected at construction; nothing reads ambient
//!   global paths
//! - No locking: two concurrent saves can both pass the conflict probe
//!   before either writes (accepted single-administrator assumption)
//! - A failed link leaves the written document orphaned and inactive; it
//!   is reported, not rolled back
//! - Protected names are enforced here rather than by caller policy

use std::fs;
use std::os::unix::fs as unix_fs;
use std::path::{Path, PathBuf};

use crate::sites::naming::create_config_name;
use crate::sites::registry::{SiteRegistry, LISTEN_DIRECTIVE};
use crate::sites::sanitize::{sanitize_file_name, sanitize_path};
use crate::sites::template::render_site_document;
use crate::sites::types::{SiteError, SiteResult};

/// Parameters for creating a site configuration.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    /// Directory to serve.
    pub path: String,
    /// Listen port; validated into [1, 65535].
    pub port: u32,
    /// Whether directory listings are enabled.
    pub autoindex: bool,
    /// Optional custom 404 page.
    pub custom_404: Option<String>,
}

/// What a successful save produced.
#[derive(Debug, Clone)]
pub struct SavedSite {
    pub name: String,
    pub root: String,
    pub port: u16,
}

/// Writer over the sites-available / sites-enabled directory pair.
pub struct SiteStore {
    available: PathBuf,
    enabled: PathBuf,
    protected: Vec<String>,
    registry: SiteRegistry,
}

impl SiteStore {
    pub fn new(
        available: impl Into<PathBuf>,
        enabled: impl Into<PathBuf>,
        protected: Vec<String>,
    ) -> Self {
        let available = available.into();
        let registry = SiteRegistry::new(available.clone());
        Self {
            available,
            enabled: enabled.into(),
            protected,
            registry,
        }
    }

    /// The registry over this store's sites-available directory.
    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    /// Create a configuration document and activate it.
    ///
    /// The document is written under a freshly generated name, then the
    /// activation link is replaced. See the module notes for the partial
    /// failure modes.
    pub fn save(&self, request: &SaveRequest) -> SiteResult<SavedSite> {
        let path = sanitize_path(&request.path);
        let port = validate_port(request.port)?;
        let custom_404 = request
            .custom_404
            .as_deref()
            .map(sanitize_path)
            .filter(|page| !page.is_empty());

        if !Path::new(&path).is_dir() {
            return Err(SiteError::InvalidPath(path));
        }

        let name = create_config_name(&path);
        if self.registry.is_port_in_use(port, Some(&name)) {
            return Err(SiteError::PortConflict(port));
        }

        let document = render_site_document(&path, port, request.autoindex, custom_404.as_deref());
        let document_path = self.available.join(&name);
        fs::write(&document_path, document).map_err(|source| SiteError::Write {
            name: name.clone(),
            source,
        })?;

        let link_path = self.enabled.join(&name);
        if link_path.symlink_metadata().is_ok() {
            fs::remove_file(&link_path).map_err(|source| SiteError::Link {
                name: name.clone(),
                source,
            })?;
        }
        unix_fs::symlink(&document_path, &link_path).map_err(|source| SiteError::Link {
            name: name.clone(),
            source,
        })?;

        tracing::info!(name = %name, port, root = %path, "Site configuration saved and activated");
        Ok(SavedSite {
            name,
            root: path,
            port,
        })
    }

    /// Remove a configuration document and its activation link.
    ///
    /// The link goes first; if the document removal then fails, the site
    /// is left inactive but orphaned, which is safe and reported.
    pub fn delete(&self, name: &str) -> SiteResult<()> {
        let name = self.checked_name(name)?;

        let document_path = self.available.join(&name);
        if !document_path.exists() {
            return Err(SiteError::NotFound(name));
        }

        let link_path = self.enabled.join(&name);
        if link_path.symlink_metadata().is_ok() {
            fs::remove_file(&link_path).map_err(|source| SiteError::Link {
                name: name.clone(),
                source,
            })?;
        }

        fs::remove_file(&document_path).map_err(|source| SiteError::Delete {
            name: name.clone(),
            source,
        })?;

        tracing::info!(name = %name, "Site configuration deleted");
        Ok(())
    }

    /// Rewrite the listen directive of an existing configuration.
    ///
    /// Substitutes every `listen <digits>;` occurrence. An unchanged
    /// document reports [`SiteError::NoChange`]: a missing directive and a
    /// same-value update are indistinguishable here and both fail.
    pub fn update_port(&self, name: &str, new_port: u32) -> SiteResult<()> {
        let name = self.checked_name(name)?;
        let new_port = validate_port(new_port)?;

        let document_path = self.available.join(&name);
        if !document_path.exists() {
            return Err(SiteError::NotFound(name));
        }

        if self.registry.is_port_in_use(new_port, Some(&name)) {
            return Err(SiteError::PortConflict(new_port));
        }

        let content = fs::read_to_string(&document_path).map_err(|source| SiteError::Write {
            name: name.clone(),
            source,
        })?;
        let replacement = format!("listen {new_port};");
        let replaced = LISTEN_DIRECTIVE.replace_all(&content, replacement.as_str());
        if replaced.as_ref() == content.as_str() {
            return Err(SiteError::NoChange);
        }

        fs::write(&document_path, replaced.as_ref()).map_err(|source| SiteError::Write {
            name: name.clone(),
            source,
        })?;

        tracing::info!(name = %name, port = new_port, "Listen port updated");
        Ok(())
    }

    fn checked_name(&self, raw: &str) -> SiteResult<String> {
        let name = sanitize_file_name(raw);
        if name.is_empty() {
            return Err(SiteError::InvalidInput {
                field: "name",
                reason: "empty after sanitizing".into(),
            });
        }
        if self.protected.iter().any(|p| p == &name) {
            return Err(SiteError::Protected(name));
        }
        Ok(name)
    }
}

fn validate_port(raw: u32) -> SiteResult<u16> {
    if raw == 0 || raw > u16::MAX as u32 {
        return Err(SiteError::InvalidInput {
            field: "port",
            reason: format!("{raw} is not between 1 and 65535"),
        });
    }
    Ok(raw as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_bounds() {
        assert!(matches!(
            validate_port(0),
            Err(SiteError::InvalidInput { field: "port", .. })
        ));
        assert!(matches!(
            validate_port(65536),
            Err(SiteError::InvalidInput { field: "port", .. })
        ));
        assert_eq!(validate_port(1).unwrap(), 1);
        assert_eq!(validate_port(65535).unwrap(), 65535);
    }

    #[test]
    fn test_protected_names_rejected() {
        let store = SiteStore::new("/tmp/a", "/tmp/e", vec!["default".into()]);
        assert!(matches!(
            store.delete("default"),
            Err(SiteError::Protected(_))
        ));
        assert!(matches!(
            store.update_port("default", 8080),
            Err(SiteError::Protected(_))
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let store = SiteStore::new("/tmp/a", "/tmp/e", Vec::new());
        assert!(matches!(
            store.delete("///"),
            Err(SiteError::InvalidInput { field: "name", .. })
        ));
    }
}
