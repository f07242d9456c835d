#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Transport(String),

    #[error("Failed to fetch athletes")]
    Status { status: u16 },

    #[error("malformed athlete payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("athlete retrieval stopped: {0}")]
    Aborted(String),
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport(source.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(source: tokio::task::JoinError) -> Self {
        Self::Aborted(source.to_string())
    }
}
