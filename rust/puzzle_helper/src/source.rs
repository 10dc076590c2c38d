//! Loading the digit block and layout files.

use std::fs;
use std::path::Path;

use log::{info, warn};
use puzzle_core::config::parse_partition_spec;
use puzzle_core::PartitionSpec;

use crate::error::SourceError;

/// Read the source block as raw lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let contents =
        fs::read_to_string(path).map_err(|e| SourceError::from_io(path.to_path_buf(), e))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Read the source block, degrading to no lines when it is unavailable.
///
/// An unreadable source yields an empty grid downstream, not a failed request.
pub fn load_lines(path: &Path) -> Vec<String> {
    match read_lines(path) {
        Ok(lines) => {
            info!("Loaded {} lines from {}", lines.len(), path.display());
            lines
        }
        Err(e) if e.is_not_found() => {
            warn!("No source at {}, continuing with an empty grid", path.display());
            Vec::new()
        }
        Err(e) => {
            warn!("Source unavailable ({}), continuing with an empty grid", e);
            Vec::new()
        }
    }
}

/// Read and validate a JSON layout file.
pub fn load_layout(path: &Path) -> anyhow::Result<PartitionSpec> {
    let json =
        fs::read_to_string(path).map_err(|e| SourceError::from_io(path.to_path_buf(), e))?;
    let spec = parse_partition_spec(&json)?;
    info!("Layout {}: {:?}", path.display(), spec);
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_lines_without_terminators() {
        let file = temp_with("3141592653\r\n5897932384\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["3141592653", "5897932384"]);
    }

    #[test]
    fn test_missing_source_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("puzzle.txt");
        assert!(read_lines(&missing).unwrap_err().is_not_found());
        assert!(load_lines(&missing).is_empty());
    }

    #[test]
    fn test_load_layout() {
        let file = temp_with(r#"{"x_offset":5,"x_step":5,"y_offset":1,"y_step":1}"#);
        let spec = load_layout(file.path()).unwrap();
        assert_eq!(spec, PartitionSpec::new(5.0, 5.0, 1.0, 1.0).unwrap());
    }

    #[test]
    fn test_invalid_layout_is_an_error() {
        let file = temp_with(r#"{"x_step":-1}"#);
        assert!(load_layout(file.path()).is_err());
        let dir = tempfile::tempdir().unwrap();
        assert!(load_layout(&dir.path().join("layout.json")).is_err());
    }
}
