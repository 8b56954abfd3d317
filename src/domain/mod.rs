//! Domain list loading.
//!
//! Input files hold one domain per line. Surrounding whitespace is trimmed,
//! blank lines and `#` comment lines are skipped, order is preserved and
//! duplicates are kept.

use std::path::Path;

use crate::error_handling::InputError;

/// Loads the domains to check from `path`.
///
/// # Errors
///
/// - `InputError::NotFound` if `path` does not exist
/// - `InputError::Read` if the file cannot be read as UTF-8 text
pub fn load_domains(path: &Path) -> Result<Vec<String>, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_domains(&contents))
}

/// Extracts domains from text, one per line.
pub fn parse_domains(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
