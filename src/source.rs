//! Input sources
//!
//! Reads chat exports and CSV files from disk, and resolves file names the
//! way a user expects: as given, then relative to the working directory,
//! then next to the executable.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::attribution::Table;
use crate::error::{WcgError, WcgResult};

/// Read a UTF-8 text file as lines with terminators removed
pub fn read_lines(path: &Path) -> WcgResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
    info!("📄 This WhatsApp export has {} line(s) of data in it", lines.len());
    Ok(lines)
}

/// Read a CSV file with a header row into a [`Table`] of string cells
pub fn read_table(path: &Path) -> WcgResult<Table> {
    let file = fs::File::open(path)?;
    parse_table(file)
}

/// Parse CSV data with a header row
pub fn parse_table<R: std::io::Read>(reader: R) -> WcgResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    info!(
        "📄 This CSV has {} row(s) and {} column(s)",
        rows.len(),
        columns.len()
    );
    Ok(Table::new(columns, rows))
}

/// Directories searched by [`find_file`] after the path as given
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
    {
        dirs.push(exe_dir);
    }
    dirs
}

/// Locate a file as given, or inside one of `search_dirs`
pub fn find_file(name: &Path, search_dirs: &[PathBuf]) -> WcgResult<PathBuf> {
    if name.is_file() {
        return Ok(name.to_path_buf());
    }

    for dir in search_dirs {
        let candidate = dir.join(name);
        if candidate.is_file() {
            debug!("Found {} in {}", name.display(), dir.display());
            return Ok(candidate);
        }
    }

    Err(WcgError::Config(format!(
        "The file ({}) cannot be found.",
        name.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_with_header() {
        let data = "who,what\nAlice,\"Hi, Bob\"\nBob,Hello\n";
        let table = parse_table(data.as_bytes()).expect("parse");
        assert_eq!(table.columns, vec!["who", "what"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["Alice".to_string(), "Hi, Bob".to_string()],
                vec!["Bob".to_string(), "Hello".to_string()],
            ]
        );
    }

    #[test]
    fn test_parse_table_keeps_ragged_rows() {
        // Width checks belong to the attributor
        let data = "a,b\n1,2\n3\n";
        let table = parse_table(data.as_bytes()).expect("parse");
        assert_eq!(table.rows[1], vec!["3".to_string()]);
    }

    #[test]
    fn test_header_only() {
        let table = parse_table("a,b\n".as_bytes()).expect("parse");
        assert_eq!(table.columns.len(), 2);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_read_lines_strips_terminators() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("chat.txt");
        fs::write(&path, "first\r\nsecond\n\nfourth").expect("write");

        let lines = read_lines(&path).expect("read");
        assert_eq!(lines, vec!["first", "second", "", "fourth"]);
    }

    #[test]
    fn test_find_file_in_search_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("heart.png"), b"png").expect("write");

        let found = find_file(Path::new("heart.png"), &[dir.path().to_path_buf()])
            .expect("find");
        assert_eq!(found, dir.path().join("heart.png"));
    }

    #[test]
    fn test_find_file_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = find_file(Path::new("nope.png"), &[dir.path().to_path_buf()]);
        assert!(matches!(result, Err(WcgError::Config(_))));
    }
}
