use chrono::NaiveDate;
use rspotify::{ClientError, model::IdError};
use thiserror::Error;

/// Errors that end a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Spotify answered with something other than what was asked for
    #[error("Unexpected Spotify response: {0}")]
    UnexpectedResponse(String),

    /// Spotify API or authorization failure
    #[error("Spotify error: {0}")]
    SpotifyError(#[from] ClientError),

    /// A user, playlist or track id failed validation
    #[error("Invalid Spotify identifier: {0}")]
    InvalidId(#[from] IdError),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Prompt input or output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a valid date was entered
    #[error("Input closed before a valid date was entered")]
    InputClosed,
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result type for rcharts operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reason a chart page could not be retrieved.
///
/// Fetch failures are never fatal: the caller reports the message and carries
/// on with an empty chart.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No response within the request timeout
    #[error("The request timed out. Please try again or check your connection.")]
    Timeout,

    /// Non-2xx response
    #[error("HTTP error occurred: {0}")]
    Status(reqwest::StatusCode),

    /// Connection or transfer failure
    #[error("An error occurred during the request: {0}")]
    Network(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status(status)
        } else {
            FetchError::Network(err)
        }
    }
}

/// Rejected date input. Both variants are recoverable by asking again.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateError {
    /// Not a `YYYY-MM-DD` calendar date
    #[error("Invalid date or format: {0:?}. Please enter a valid date in YYYY-MM-DD format.")]
    Malformed(String),

    /// A date after today
    #[error("{0} is in the future. Please enter a date no later than today.")]
    InFuture(NaiveDate),
}
