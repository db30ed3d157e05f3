use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not an Apple Music song, album or playlist link: {0}")]
    InvalidUrlKind(String),

    #[error("Failed to fetch {url}: {reason}")]
    FetchFailure { url: String, reason: String },

    #[error("No MusicAlbum or MusicPlaylist structured data found on page")]
    NoStructuredDataFound,

    #[error("Malformed duration: {0:?}")]
    MalformedDuration(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn fetch_failure(url: &str, reason: impl ToString) -> Self {
        AppError::FetchFailure {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
