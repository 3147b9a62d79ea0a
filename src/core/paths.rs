//! Path normalization and extension matching
//!
//! Path markers always use '/' as separator, whatever the platform.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Extension of a file name including its leading dot
///
/// Leading dots belong to the name, so `.ts`, `..ts` and `.gitignore` have
/// no extension.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let stem = name.trim_start_matches('.');
    stem.rfind('.').map(|dot| stem[dot..].to_string())
}

/// Check the path's extension against the allow-list (case-sensitive)
pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    extension_of(path)
        .map(|ext| extensions.iter().any(|allowed| *allowed == ext))
        .unwrap_or(false)
}

/// Clean up a user-supplied extension list
///
/// Adds the leading dot where missing, drops empty entries and removes
/// duplicates while keeping the first occurrence.
pub fn normalize_extensions(raw: &[String]) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();

    for ext in raw {
        let ext = ext.trim();
        if ext.is_empty() || ext == "." {
            continue;
        }

        let ext = if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{}", ext)
        };

        if !extensions.contains(&ext) {
            extensions.push(ext);
        }
    }

    extensions
}
