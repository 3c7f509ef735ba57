#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Missing key: {0}")]
    MissingKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
