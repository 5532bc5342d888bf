// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepository {
    fn create_comment(&self, comment: Comment) -> Result<()>;

    // Most recently created comments first
    fn all_comments(&self) -> Result<Vec<Comment>>;
    fn count_comments(&self) -> Result<usize>;

    // Atomically removes the comment if it exists and fails
    // with `Error::NotFound` otherwise. Implementations must
    // not use a separate existence check before the removal.
    fn delete_comment(&self, id: &str) -> Result<()>;
}

pub trait UserRepo {
    fn create_user(&self, user: User) -> Result<()>;
    fn get_users_by_ids(&self, ids: &[&str]) -> Result<Vec<User>>;
}
