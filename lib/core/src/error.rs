use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Problem not found: {0}")]
    ProblemNotFound(String),

    #[error("Problem {0} has no rating and no explicit rating bounds were given")]
    MissingRating(String),

    #[error("Malformed catalog record: {0}")]
    MalformedInput(String),

    #[error("Catalog has not been loaded yet")]
    CatalogUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
