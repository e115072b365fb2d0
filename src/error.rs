//! Error types.

/// Error enumerates the possible Tool Crab error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a [`Config`][crate::config::Config] is loaded with values that can't be
    /// used to run the service, e.g. a zero process limit or an empty tool path.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when [trying to load a `Config`][crate::config::Config::try_from_file] fails
    /// due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),

    /// Returned when an API request body isn't JSON or doesn't decode into the endpoint's
    /// payload, e.g. a wrongly typed field or an unknown nameserver.
    #[error("invalid request body: {0}")]
    InvalidRequestBody(serde_json::Error),

    /// Returned when the HTTP API server can't bind its listen address or fails while serving.
    #[error("HTTP server error")]
    Server(#[from] hyper::Error),
}
