use cdb_entities as e;

use super::*;

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            created_at,
            created_by,
            text,
        } = from;
        Self {
            id: id.into(),
            created_at: created_at.as_millis(),
            created_by: created_by.map(Into::into),
            author: None,
            text,
        }
    }
}

impl From<(e::comment::Comment, Option<String>)> for Comment {
    fn from((comment, author): (e::comment::Comment, Option<String>)) -> Self {
        Self {
            author,
            ..Self::from(comment)
        }
    }
}
