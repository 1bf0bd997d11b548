//! Dictionary loading utilities
//!
//! Loads the JSON word-to-weight dictionary and the optional rejection cache
//! produced by the curation tools.

use super::Dictionary;
use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Could not read dictionary {}: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "Dictionary {} is not a valid JSON object: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Shape of the curation cache file; only the rejected list matters here
#[derive(Debug, Default, Deserialize)]
struct WordCache {
    #[serde(default)]
    rejected: Vec<String>,
}

/// Load a dictionary from a JSON object mapping word to integer weight
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read or is not a JSON
/// object of word to non-negative integer.
///
/// # Examples
/// ```no_run
/// use spelling_bee::dictionary::load_dictionary;
///
/// let dictionary = load_dictionary("filtered_dictionary.json").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: FxHashMap<String, u64> =
        serde_json::from_str(&content).map_err(|source| DictionaryError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Dictionary {
        words: words.into_keys().collect(),
    })
}

/// Load the set of rejected words from a curation cache file
///
/// A missing file means nothing has been rejected yet. A file that cannot be
/// parsed is reported and treated as empty so a broken cache never blocks
/// generation.
pub fn load_rejections<P: AsRef<Path>>(path: P) -> FxHashSet<String> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return FxHashSet::default(),
        Err(err) => {
            warn!("Could not read word cache {}: {err}", path.display());
            return FxHashSet::default();
        }
    };

    match serde_json::from_str::<WordCache>(&content) {
        Ok(cache) => cache.rejected.into_iter().collect(),
        Err(err) => {
            warn!("Could not parse word cache {}: {err}", path.display());
            FxHashSet::default()
        }
    }
}
