use chrono::{DateTime, Duration, Utc};
use probsim_core::{RawProblem, Result, TagVectorizer};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use crate::provider::CatalogProvider;
use crate::store::{CatalogSnapshot, CatalogStore};

/// On-disk form of a catalog snapshot
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheFile {
    last_loaded: DateTime<Utc>,
    problems: Vec<RawProblem>,
}

/// Persists the last loaded catalog as JSON so that a later process can
/// decide staleness from the original load time
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    path: PathBuf,
}

impl SnapshotCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached snapshot, or `None` when no cache file exists
    pub fn load(&self) -> Result<Option<CatalogSnapshot>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let cached: CacheFile = serde_json::from_reader(BufReader::new(file))?;
        let catalog = TagVectorizer::vectorize(&cached.problems)?;
        Ok(Some(CatalogSnapshot::new(catalog, cached.last_loaded)))
    }

    /// Write `snapshot` to a temporary file, then rename it over the cache
    pub fn save(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        let cached = CacheFile {
            last_loaded: snapshot.loaded_at(),
            problems: snapshot.catalog().iter().map(RawProblem::from).collect(),
        };
        let data = serde_json::to_vec(&cached)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let temp_file = self.path.with_extension("tmp");
        fs::write(&temp_file, &data)?;
        fs::rename(&temp_file, &self.path)?;

        debug!("Catalog cache written to {:?}", self.path);
        Ok(())
    }

    /// A store seeded from the cache, or an empty one if the cache is
    /// missing or unreadable
    pub fn open_store(&self) -> CatalogStore {
        match self.load() {
            Ok(Some(snapshot)) => {
                info!(
                    "Catalog cache loaded: {} problems from {}",
                    snapshot.catalog().len(),
                    snapshot.loaded_at()
                );
                CatalogStore::with_snapshot(snapshot)
            }
            Ok(None) => CatalogStore::new(),
            Err(e) => {
                warn!("Ignoring unreadable catalog cache {:?}: {}", self.path, e);
                CatalogStore::new()
            }
        }
    }

    /// [`CatalogStore::refresh_if_stale`], rewriting the cache after a reload
    pub fn refresh_if_stale(
        &self,
        store: &CatalogStore,
        now: DateTime<Utc>,
        ttl: Duration,
        provider: &dyn CatalogProvider,
    ) -> Result<bool> {
        let reloaded = store.refresh_if_stale(now, ttl, provider)?;
        if reloaded {
            self.save(&*store.current()?)?;
        }
        Ok(reloaded)
    }
}
