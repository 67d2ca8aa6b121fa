use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid article {id}: {reason}")]
    InvalidArticle { id: u64, reason: String },

    #[error("Duplicate article id: {0}")]
    DuplicateId(u64),

    #[error("Invalid URL in article {id}: {url}")]
    InvalidUrl { id: u64, url: String },

    #[error("Article not found: {0}")]
    NotFound(u64),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
