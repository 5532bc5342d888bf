use std::collections::HashMap;

use super::prelude::*;

pub fn load_comments<R>(repo: &R) -> Result<Vec<Comment>>
where
    R: CommentRepository,
{
    Ok(repo.all_comments()?)
}

/// Loads all comments and resolves the name of each referenced
/// author (read-time join, nothing is denormalized into storage).
pub fn load_comments_with_authors<R>(repo: &R) -> Result<Vec<(Comment, Option<String>)>>
where
    R: CommentRepository + UserRepo,
{
    let comments = repo.all_comments()?;
    let user_ids: Vec<_> = comments
        .iter()
        .filter_map(|c| c.created_by.as_ref().map(Id::as_str))
        .collect();
    let names: HashMap<Id, String> = repo
        .get_users_by_ids(&user_ids)?
        .into_iter()
        .map(|user| (user.id, user.name))
        .collect();
    Ok(comments
        .into_iter()
        .map(|comment| {
            let author = comment
                .created_by
                .as_ref()
                .and_then(|user_id| names.get(user_id).cloned());
            (comment, author)
        })
        .collect())
}
