use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum GwError {
    /// The client was misconfigured (e.g. a required API key is missing).
    #[error("configuration error: {0}")]
    Config(String),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with its query string stripped.
        url: String,
    },

    /// The news API answered with an unsuccessful HTTP status and no
    /// machine-readable error envelope.
    #[error("news request failed with status {status} at {url}")]
    NewsStatus {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The news API rejected the request with a structured error envelope.
    #[error("news request rejected ({code}): {message}")]
    NewsApi {
        /// Machine-readable error code (e.g. `apiKeyInvalid`).
        code: String,
        /// Human-readable message from the API.
        message: String,
    },

    /// The generation endpoint answered with an unsuccessful HTTP status.
    #[error("analysis request failed with status {status} at {url}")]
    AnalysisStatus {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with its query string stripped.
        url: String,
    },

    /// The model's response text could not be parsed into a usable analysis.
    #[error("analysis response not usable: {reason}")]
    Parse {
        /// What went wrong while parsing or validating.
        reason: String,
        /// The raw response text, kept verbatim for diagnostics.
        raw: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}
