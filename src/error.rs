use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Browser error: {0}")]
    Browser(String),
    #[error("No elements matching `{selector}` appeared within {timeout:?}")]
    CardsNotFound { selector: String, timeout: Duration },
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Card error: {0}")]
    Card(#[from] CardError),
    #[error("{0}")]
    Other(String),
}

/// Reasons a single popover is rejected. These never abort a run.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CardError {
    #[error("popover has {found} images, expected at least 8")]
    InsufficientImages { found: usize },
    #[error("image {index} has no alt text")]
    MissingAlt { index: usize },
}

pub type Result<T> = std::result::Result<T, ScraperError>;
