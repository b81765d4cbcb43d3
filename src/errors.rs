use thiserror::Error;

/// Errors that can occur outside the pure lookup path.
#[derive(Error, Debug)]
pub enum StatusLensError {
    #[error("catalog error: {message} (code: {code})")]
    Catalog { message: String, code: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("launch error: {message} (url: {url})")]
    Launch { message: String, url: String },

    #[error("protocol error: {message}")]
    Protocol { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `StatusLensError`.
pub type Result<T> = std::result::Result<T, StatusLensError>;
