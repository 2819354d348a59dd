use thiserror::Error;

#[derive(Debug, Error)]
pub enum LyearnError {
    #[error("LYEARN_API_URL is not set")]
    MissingApiUrl,

    #[error("action-item API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LyearnError>;
