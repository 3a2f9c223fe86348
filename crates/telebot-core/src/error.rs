use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelebotError {
    /// Anything below the HTTP layer: DNS, connect, TLS, timeout.
    /// Stored without its URL, which carries the bot token.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A reply with `ok: false`, for callers that opt into treating it as an error.
    #[error("telegram error: {description}")]
    Api {
        error_code: Option<i64>,
        description: String,
    },
    #[error("http error ({status}): {body}")]
    Http { status: u16, body: String },
    #[error("config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for TelebotError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}

pub type Result<T> = std::result::Result<T, TelebotError>;
