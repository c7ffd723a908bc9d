use thiserror::Error;

#[derive(Error, Debug)]
pub enum WinCleanError {
    #[error("API key is missing - set {env_var} to enable analysis")]
    MissingApiKey { env_var: &'static str },

    #[error("LLM client error: {0}")]
    LlmClientError(String),

    #[error("Analysis timed out after {timeout} seconds")]
    AnalysisTimeout { timeout: u64 },

    #[error("Unknown cleanup option: {id}")]
    UnknownOption { id: String },

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
