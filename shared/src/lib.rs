pub mod models;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),
}
