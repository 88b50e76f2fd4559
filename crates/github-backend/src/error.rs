use cards_core::CardsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for CardsError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => CardsError::Http(e.to_string()),
            GitHubError::Parse(e) => CardsError::Parse(e.to_string()),
            GitHubError::Io(e) => CardsError::Io(e.to_string()),
        }
    }
}
