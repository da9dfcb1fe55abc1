use thiserror::Error;

/// Rejections raised while building a [`Holding`](crate::models::Holding).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("Invalid price value for {field}: {value}")]
    InvalidPrice { field: &'static str, value: f64 },

    #[error("Calculation error occurred")]
    CalculationOverflow,
}

/// Failures of the remote holdings source.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Invalid URL: {0}")]
    InvalidConfig(String),

    #[error("Invalid server response")]
    InvalidResponse,

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("Request timeout")]
    Timeout,

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RemoteError::Timeout
        } else if let Some(status) = err.status() {
            RemoteError::HttpStatus(status.as_u16())
        } else if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

impl From<sqlx::Error> for CacheError {
    fn from(err: sqlx::Error) -> Self {
        CacheError::Persistence(err.to_string())
    }
}

/// Outcome error of one holdings fetch.
///
/// `Cancelled` is control flow: a superseded or torn-down attempt resolves to it
/// and callers drop it silently instead of presenting it.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HoldingsError {
    #[error("Fetch cancelled")]
    Cancelled,

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl HoldingsError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, HoldingsError::Cancelled)
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HoldingsError::Remote(RemoteError::Transport(_) | RemoteError::Timeout) => {
                "Please check your internet connection and try again."
            }
            HoldingsError::Remote(RemoteError::HttpStatus(401)) => "Please sign in again.",
            HoldingsError::Remote(RemoteError::HttpStatus(_)) => "Please try again later.",
            _ => "Please try again.",
        }
    }
}
