use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use probsim_api::{QueryHandler, QueryRequest};
use probsim_core::Error;
use probsim_similarity::{RankerConfig, SimilarityRanker, MAX_RESULTS, MIN_SIMILARITY};
use probsim_storage::{CatalogStore, JsonFileProvider, SnapshotCache, DEFAULT_TTL_SECS};

/// Recommend problems similar to a given competitive-programming problem
#[derive(Parser, Debug)]
#[command(name = "probsim")]
#[command(about = "Find similar problems by tag overlap", long_about = None)]
struct Args {
    /// Path to a JSON array of problem records
    #[arg(short, long)]
    catalog: PathBuf,

    /// Problem id to query, e.g. 1500A (repeatable)
    #[arg(short, long = "problem", required = true)]
    problems: Vec<String>,

    /// Lower rating bound; ignored unless --rating-to also parses
    #[arg(long)]
    rating_from: Option<String>,

    /// Upper rating bound; ignored unless --rating-from also parses
    #[arg(long)]
    rating_to: Option<String>,

    /// Cache file for the last loaded catalog; reused across runs until stale
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Reload the cached catalog when it is older than this many seconds
    #[arg(long, default_value_t = DEFAULT_TTL_SECS)]
    ttl_secs: i64,

    /// Maximum number of recommendations per problem
    #[arg(long, default_value_t = MAX_RESULTS)]
    limit: usize,

    /// Minimum similarity score
    #[arg(long, default_value_t = MIN_SIMILARITY)]
    min_similarity: f64,

    /// Half-width of the default rating window
    #[arg(long, default_value_t = probsim_core::DEFAULT_RATING_WINDOW)]
    rating_window: i32,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if args.ttl_secs <= 0 {
        let message = format!("ttl must be positive, got {}", args.ttl_secs);
        return Err(Error::InvalidConfig(message).into());
    }
    let config = RankerConfig {
        min_similarity: args.min_similarity,
        max_results: args.limit,
        rating_window: args.rating_window,
    };
    config.validate()?;

    info!("Starting probsim v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);

    let provider = JsonFileProvider::new(&args.catalog);
    let now = chrono::Utc::now();
    let ttl = chrono::Duration::seconds(args.ttl_secs);
    let store = match &args.cache {
        Some(path) => {
            info!("Cache: {:?}", path);
            let cache = SnapshotCache::new(path);
            let store = cache.open_store();
            cache.refresh_if_stale(&store, now, ttl, &provider)?;
            store
        }
        None => {
            let store = CatalogStore::new();
            store.refresh_if_stale(now, ttl, &provider)?;
            store
        }
    };
    let store = Arc::new(store);

    let handler = QueryHandler::new(store, SimilarityRanker::new(config));

    for problem_id in &args.problems {
        let request = QueryRequest {
            problem_id: problem_id.clone(),
            rating_from: args.rating_from.clone(),
            rating_to: args.rating_to.clone(),
        };
        let response = handler.handle(&request);
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
