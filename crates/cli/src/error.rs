use algo_practice_search::GraphError;
use algo_practice_sort::RangeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Range(#[from] RangeError),
    #[error("{0}")]
    Graph(#[from] GraphError),
    #[error("invalid config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
