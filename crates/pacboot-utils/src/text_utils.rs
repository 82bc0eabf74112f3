use regex::Regex;
use std::fs;
use std::path::Path;

use pacboot_error::{BootstrapError, Result};

/// In-place, line-oriented substitution over a text file, in the spirit of
/// `sed -i s/pattern/replacement/`. `^` and `$` match at every line.
///
/// Returns the number of replaced occurrences.
pub fn substitute_in_file(path: &Path, pattern: &str, replacement: &str) -> Result<usize> {
    let regex = Regex::new(&format!("(?m){pattern}"))
        .map_err(|e| BootstrapError::InvalidPattern(e.to_string()))?;

    let content = fs::read_to_string(path)
        .map_err(|e| BootstrapError::Io(format!("Failed to read {}: {e}", path.display())))?;

    let count = regex.find_iter(&content).count();
    if count == 0 {
        return Ok(0);
    }

    let updated = regex.replace_all(&content, replacement);
    fs::write(path, updated.as_bytes())
        .map_err(|e| BootstrapError::Io(format!("Failed to write {}: {e}", path.display())))?;

    Ok(count)
}
