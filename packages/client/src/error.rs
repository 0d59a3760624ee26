use seafront_api::status;

/// Errors surfaced by the client.
///
/// Every failure is a tagged variant rather than a collapsed boolean, so
/// callers can tell a malformed path from a cache miss from a remote
/// rejection and react to each separately.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Malformed path, or root passed to an operation that needs a
    /// concrete library.
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: String, message: String },

    /// The operation needs a library that is not in the cache. Call
    /// `refresh_libraries()` or `list("/")` first.
    #[error("library '{library}' is not in the cache")]
    LibraryNotCached { library: String },

    /// A transport was requested before a token was acquired.
    #[error("no authentication token - call acquire_token first")]
    NotAuthenticated,

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_path(path: &str, message: &str) -> Self {
        Error::InvalidPath {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn from_status(code: u16) -> Self {
        Error::Status {
            status: code,
            message: status::describe(code),
        }
    }
}
