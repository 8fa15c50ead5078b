//! Input sanitizers for user-supplied paths and filenames.
//!
//! Sanitizing never fails: unsafe input degrades to an empty or truncated
//! string, which the directory-existence check downstream rejects.

/// Strip traversal sequences and shell metacharacters from a path.
///
/// Each dangerous sequence is removed in a single left-to-right pass, then
/// every character outside `[A-Za-z0-9/._-]` is dropped.
pub fn sanitize_path(raw: &str) -> String {
    let mut path = raw.trim().to_string();
    for sequence in ["../", "..\\", "./", ".\\", "&&", ";", "|"] {
        path = path.replace(sequence, "");
    }
    path.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-'))
        .collect()
}

/// Restrict a filename to `[A-Za-z0-9._-]`; path separators never survive.
pub fn sanitize_file_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}
