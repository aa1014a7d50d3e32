//! Line reading and filtering shared by both loaders.

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Trimmed content of `raw`, or None for blank and `#` comment lines.
pub fn significant_line(raw: &str) -> Option<&str> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        None
    } else {
        Some(line)
    }
}

/// Read every line of a text file.
///
/// Fails if the file can't be opened or a read fails part way through.
/// Bytes that are not UTF-8 become U+FFFD, so such a line fails to parse
/// later and is skipped like any other malformed entry.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let file =
        File::open(path).map_err(|e| format!("Error opening {}: {e}", path.display()))?;
    let mut lines = vec![];
    for line in BufReader::new(file).split(b'\n') {
        let mut line = line.map_err(|e| format!("Error reading {}: {e}", path.display()))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(String::from_utf8_lossy(&line).into_owned());
    }
    log::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
