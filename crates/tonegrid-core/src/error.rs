use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("malformed note list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("persisted notes are not an array")]
    NotAnArray,
}
