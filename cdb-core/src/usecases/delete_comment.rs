use super::prelude::*;

/// Permanently removes the comment with the given id.
///
/// Relies on the repository's atomic delete-if-exists primitive,
/// so concurrent deletions of the same id resolve to exactly one
/// success and `Error::Repo(NotFound)` for all others.
pub fn delete_comment<R>(repo: &R, id: &str) -> Result<()>
where
    R: CommentRepository,
{
    if id.trim().is_empty() {
        return Err(Error::InvalidId);
    }
    log::debug!("Deleting comment {id}");
    Ok(repo.delete_comment(id)?)
}
