pub mod query;

pub use query::{QueryHandler, QueryRequest, QueryResponse};
