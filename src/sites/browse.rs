//! Directory browsing aid for the admin surface.

use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

/// One directory eligible for serving, with presentation hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    /// Absolute path, usable as a save target.
    pub path: String,
    /// Label relative to the browse root (`/` for the root itself).
    pub display: String,
    /// Nesting depth below the root.
    pub level: usize,
    /// Parent directory, absent for the root.
    pub parent: Option<String>,
}

/// Recursively collect the directories under `root`, sorted by path so
/// parents always precede their children.
///
/// The root itself is always the first candidate, even when it does not
/// exist; unreadable subtrees are skipped.
pub fn scan_directories(root: &Path) -> Vec<DirectoryNode> {
    let mut nodes = vec![DirectoryNode {
        path: root.display().to_string(),
        display: "/".to_string(),
        level: 0,
        parent: None,
    }];

    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "Browse root is not a readable directory");
        return nodes;
    }

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let display = path
            .strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string();
        nodes.push(DirectoryNode {
            path: path.display().to_string(),
            display: display.clone(),
            level: display.matches('/').count() + 1,
            parent: path.parent().map(|p| p.display().to_string()),
        });
    }

    nodes.sort_by(|a, b| a.path.cmp(&b.path));
    nodes
}
