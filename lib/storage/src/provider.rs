use probsim_core::{RawProblem, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Source of raw catalog records
///
/// Implementations own any network or disk policy (timeouts, retries).
/// The store calls [`CatalogProvider::fetch`] once per refresh.
pub trait CatalogProvider: Send + Sync {
    fn fetch(&self) -> Result<Vec<RawProblem>>;
}

/// Reads a JSON array of raw problem records from disk
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonFileProvider {
    fn fetch(&self) -> Result<Vec<RawProblem>> {
        let file = File::open(&self.path)?;
        let records: Vec<RawProblem> = serde_json::from_reader(BufReader::new(file))?;
        Ok(records)
    }
}

/// Serves a fixed, in-memory set of records
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    records: Vec<RawProblem>,
}

impl StaticProvider {
    pub fn new(records: Vec<RawProblem>) -> Self {
        Self { records }
    }
}

impl CatalogProvider for StaticProvider {
    fn fetch(&self) -> Result<Vec<RawProblem>> {
        Ok(self.records.clone())
    }
}
