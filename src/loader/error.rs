use thiserror::Error;

/// Broad class of a failed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Could not reach the endpoint (DNS, TLS, connection, body read).
    Transport,
    /// Server answered with a non-success status.
    Api,
    /// Body was not valid JSON or not a list of countries.
    Parse,
}

/// Errors that can occur while loading the country list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Request never produced a readable response
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status; displays the server's message verbatim
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Body is not JSON or does not match the record layout
    #[error("Failed to parse response body: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// Body is JSON but neither an array nor an object of records
    #[error("Unexpected response body: expected a list of countries, got {found}")]
    UnexpectedShape { found: &'static str },
}

impl LoadError {
    pub fn kind(&self) -> FailureKind {
        match self {
            LoadError::Client { .. } | LoadError::Transport { .. } => FailureKind::Transport,
            LoadError::Api { .. } => FailureKind::Api,
            LoadError::Parse { .. } | LoadError::UnexpectedShape { .. } => FailureKind::Parse,
        }
    }
}
