use thiserror::Error;

use crate::models::Todo;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Create request rejected before reaching the repository.
    ///
    /// The payload echoes the submitted `text`/`when`/`status` plus the id
    /// minted for the attempt, so callers can inspect exactly what was
    /// refused. The id is assigned even though nothing was stored.
    #[error("invalid data")]
    InvalidData { data: Todo },

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type TodoResult<T> = Result<T, TodoError>;
