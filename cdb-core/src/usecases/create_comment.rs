use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub created_by: Option<Id>,
}

/// Stores a new comment and returns its generated id.
///
/// Not exposed over HTTP. Comments are created by an external
/// endpoint; this use case exists for seeding and tests.
pub fn create_comment<R>(repo: &R, new_comment: NewComment) -> Result<Id>
where
    R: CommentRepository,
{
    let NewComment { text, created_by } = new_comment;
    if text.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    let comment = Comment {
        id: Id::new(),
        created_at: Timestamp::now(),
        created_by,
        text,
    };
    let id = comment.id.clone();
    repo.create_comment(comment)?;
    Ok(id)
}
