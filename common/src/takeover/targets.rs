use std::fs;
use std::path::Path;

use crate::error::TargetsError;

/// Reads a targets file: one hostname per line.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>, TargetsError> {
    let path: &Path = path.as_ref();
    let raw: String = fs::read_to_string(path).map_err(|source| TargetsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&raw))
}

/// Trims every line and drops the blank ones. Order and duplicates are kept.
pub fn parse(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
