//! Record loading for the card generator.
//!
//! Creature records live one per `*.json` file in a directory per game
//! system. Loading never stops at a bad file: every file that cannot be read,
//! parsed or converted is reported as a `LoadFailure` next to the records that
//! did load, and the caller decides what to do with a partial batch.
//!
//! ## Example
//!
//! ```ignore
//! use battlesheet_source::load_records;
//!
//! let report = load_records("dnd_creatures", |value| Ok::<_, String>(value))?;
//! println!("{} loaded, {} failed", report.records.len(), report.failures.len());
//! ```

use log::{debug, info, warn};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that prevent a directory from being read at all.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("No JSON files in {0}")]
    NoJsonFiles(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single file was skipped.
#[derive(Error, Debug)]
pub enum FailureReason {
    #[error("read error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Schema(String),
}

#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub reason: FailureReason,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// A successfully loaded record and the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub path: PathBuf,
    pub record: T,
}

/// The outcome of loading a directory: what loaded, and what did not.
#[derive(Debug)]
pub struct LoadReport<T> {
    pub records: Vec<Loaded<T>>,
    pub failures: Vec<LoadFailure>,
}

impl<T> LoadReport<T> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The loaded records in file order, without their paths.
    pub fn into_records(self) -> Vec<T> {
        self.records.into_iter().map(|loaded| loaded.record).collect()
    }
}

/// Lists the `*.json` files directly inside `dir`, sorted by file name.
pub fn discover_json_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, SourceError> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Err(SourceError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(SourceError::NotADirectory(dir.to_path_buf()));
    }

    let io_err = |source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(SourceError::NoJsonFiles(dir.to_path_buf()));
    }
    debug!("Found {} JSON file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Reads and parses one JSON file.
pub fn read_json_file(path: &Path) -> Result<Value, FailureReason> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Loads every JSON file in `dir` and converts it with `convert`.
///
/// Files that fail to read, parse or convert are collected in
/// `LoadReport::failures`; only directory-level problems are errors.
pub fn load_records<T, E, F>(dir: impl AsRef<Path>, convert: F) -> Result<LoadReport<T>, SourceError>
where
    F: Fn(Value) -> Result<T, E>,
    E: fmt::Display,
{
    let dir = dir.as_ref();
    let mut report = LoadReport {
        records: Vec::new(),
        failures: Vec::new(),
    };

    for path in discover_json_files(dir)? {
        let converted = read_json_file(&path)
            .and_then(|value| convert(value).map_err(|e| FailureReason::Schema(e.to_string())));
        match converted {
            Ok(record) => report.records.push(Loaded { path, record }),
            Err(reason) => {
                let failure = LoadFailure { path, reason };
                warn!("Skipping {}", failure);
                report.failures.push(failure);
            }
        }
    }

    info!(
        "Loaded {} record(s) from {} ({} failed)",
        report.records.len(),
        dir.display(),
        report.failures.len()
    );
    Ok(report)
}

/// Loads every JSON file in `dir` as a raw value.
pub fn load_directory(dir: impl AsRef<Path>) -> Result<LoadReport<Value>, SourceError> {
    load_records(dir, Ok::<Value, FailureReason>)
}
