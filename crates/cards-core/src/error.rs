use thiserror::Error;

/// Common errors shared by the widget core and its backends
#[derive(Error, Debug)]
pub enum CardsError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Component already registered: {0}")]
    DuplicateComponent(String),

    #[error("Unknown component tag: {0}")]
    UnknownComponent(String),
}

pub type Result<T> = std::result::Result<T, CardsError>;
