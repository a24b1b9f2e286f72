// Crate-wide error and result types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Search error: {0}")]
    Search(#[from] crate::search::SearchError),

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
