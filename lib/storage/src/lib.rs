pub mod cache;
pub mod provider;
pub mod store;

pub use cache::SnapshotCache;
pub use provider::{CatalogProvider, JsonFileProvider, StaticProvider};
pub use store::{default_ttl, CatalogSnapshot, CatalogStore, DEFAULT_TTL_SECS};
