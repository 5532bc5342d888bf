use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid comment id")]
    InvalidId,
    #[error("Empty comment")]
    EmptyComment,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
