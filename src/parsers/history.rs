use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::utils::validate_file_size;

/// Parse a plain-text shell history file, one command per line
///
/// Lines are whitespace-trimmed and empty lines dropped. The result keeps file order (oldest
/// first). Bytes that are not valid UTF-8 are replaced rather than failing the load.
pub fn parse_history_file(path: &Path) -> Result<Vec<String>> {
    // Open file and validate size to avoid TOCTOU race condition
    let file = File::open(path)
        .with_context(|| format!("Failed to open history file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut lossy_lines = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read line from history file: {}", path.display()))?;
        if read == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(s) => s.trim().to_string(),
            Err(_) => {
                lossy_lines += 1;
                String::from_utf8_lossy(&buf).trim().to_string()
            }
        };

        // Skip empty lines
        if !line.is_empty() {
            lines.push(line);
        }
    }

    if lossy_lines > 0 {
        debug!(lossy_lines, "history file contained invalid UTF-8");
    }
    info!(path = %path.display(), lines = lines.len(), "loaded history");

    Ok(lines)
}
