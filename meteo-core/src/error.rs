use thiserror::Error;

/// Failures that end a lookup. Missing readings and unknown weather codes are
/// not errors; they render as placeholders.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Network error: {url} returned status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Network error: unreadable response from {url}: {source}")]
    InvalidResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No results for city: {city}")]
    NotFound { city: String },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl WeatherError {
    /// Process exit code for this failure: 2 when the city is unknown, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            WeatherError::NotFound { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;
