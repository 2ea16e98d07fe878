use thiserror::Error;

/// Errors returned by the recipe API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure (DNS, connection refused, broken body stream)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status other than 404
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// The server answered 404
    #[error("Recipe not found")]
    NotFound,

    /// The response body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Recipe ids are positive integers
    #[error("Invalid recipe id: {0}")]
    InvalidId(i64),
}

/// Errors that can occur while setting up the client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The configured base URL is unusable
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
