//! Configuration name derivation.

use std::time::{SystemTime, UNIX_EPOCH};

/// Derive a filesystem-safe configuration name from a directory path.
///
/// Non-alphanumeric characters become `-`, runs are collapsed, leading and
/// trailing `-` are trimmed, and the result is truncated to 50 bytes before
/// the current Unix timestamp (seconds) is appended. Two saves of the same
/// path within the same second therefore produce the same name — a known
/// weakness of this scheme, kept rather than silently strengthened.
pub fn create_config_name(path: &str) -> String {
    let mut name = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c);
        } else if !name.ends_with('-') {
            name.push('-');
        }
    }
    let mut name = name.trim_matches('-').to_string();
    name.truncate(50);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    name.push('-');
    name.push_str(&timestamp.to_string());
    name
}
