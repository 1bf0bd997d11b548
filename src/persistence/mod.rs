//! Puzzle file storage
//!
//! Puzzle sets are JSON arrays of puzzle records. Writes go through a named
//! temp file in the target directory and are persisted in one rename, so a
//! crash never leaves a half-written puzzle file behind.

use crate::core::Puzzle;
use serde::Serialize;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Error type for reading and writing puzzle files
#[derive(Debug)]
pub enum StorageError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl StorageError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "Invalid puzzle JSON in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Load a puzzle set from a JSON array
///
/// # Errors
/// Returns `StorageError` if the file cannot be opened or parsed.
pub fn load_puzzles<P: AsRef<Path>>(path: P) -> Result<Vec<Puzzle>, StorageError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StorageError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| StorageError::json(path, e))
}

/// Write a puzzle set as a pretty-printed JSON array
///
/// # Errors
/// Returns `StorageError` if the file cannot be written.
pub fn save_puzzles<P: AsRef<Path>>(puzzles: &[Puzzle], path: P) -> Result<(), StorageError> {
    write_json(puzzles, path.as_ref())
}

/// Write a single puzzle as a pretty-printed JSON object
///
/// # Errors
/// Returns `StorageError` if the file cannot be written.
pub fn save_puzzle<P: AsRef<Path>>(puzzle: &Puzzle, path: P) -> Result<(), StorageError> {
    write_json(puzzle, path.as_ref())
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), StorageError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| StorageError::io(path, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| StorageError::io(path, e))?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, value).map_err(|e| StorageError::json(path, e))?;
        writer.write_all(b"\n").map_err(|e| StorageError::io(path, e))?;
        writer.flush().map_err(|e| StorageError::io(path, e))?;
    }

    temp.persist(path)
        .map_err(|e| StorageError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample(id: &str) -> Puzzle {
        let letters = LetterSet::new(b'a', *b"tedfgl").unwrap();
        let mut puzzle = Puzzle::new(
            id.to_string(),
            &letters,
            vec!["date".to_string(), "gate".to_string()],
            Vec::new(),
            false,
        );
        puzzle.live_date = NaiveDate::from_ymd_opt(2025, 3, 1);
        puzzle
    }

    #[test]
    fn save_then_load_puzzle_set() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("puzzles.json");
        let puzzles = vec![sample("aaaa1111"), sample("bbbb2222")];

        save_puzzles(&puzzles, &path).unwrap();
        let loaded = load_puzzles(&path).unwrap();
        assert_eq!(loaded, puzzles);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("set.json");

        save_puzzles(&[sample("cccc3333")], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_single_puzzle_writes_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");

        save_puzzle(&sample("dddd4444"), &path).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["id"], "dddd4444");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_puzzles("/nonexistent/puzzles.json");
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[test]
    fn load_malformed_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_puzzles(&path), Err(StorageError::Json { .. })));
    }
}
