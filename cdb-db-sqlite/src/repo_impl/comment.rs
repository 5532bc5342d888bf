use cdb_core::repositories::CommentRepository;

use super::*;

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        all_comments(&mut self.conn.borrow_mut())
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
    fn delete_comment(&self, id: &str) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        unreachable!();
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        all_comments(&mut self.conn.borrow_mut())
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
    fn delete_comment(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: Comment) -> Result<()> {
    let Comment {
        id,
        created_at,
        created_by,
        text,
    } = comment;
    let created_by = created_by
        .map(|user_id| resolve_user_rowid(conn, user_id.as_ref()))
        .transpose()?;
    let new_comment = models::NewComment {
        id: id.into(),
        created_at: created_at.as_millis(),
        created_by,
        text,
    };
    let _count = diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn all_comments(conn: &mut SqliteConnection) -> Result<Vec<Comment>> {
    use schema::{comments::dsl as comment_dsl, users::dsl as user_dsl};
    Ok(schema::comments::table
        .left_join(schema::users::table)
        .select((
            comment_dsl::rowid,
            comment_dsl::id,
            comment_dsl::created_at,
            comment_dsl::text,
            user_dsl::id.nullable(),
        ))
        // The rowid is a tiebreak that keeps the order total
        // for equal timestamps.
        .order((comment_dsl::created_at.desc(), comment_dsl::rowid.desc()))
        .load::<models::CommentEntry>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_comments(conn: &mut SqliteConnection) -> Result<usize> {
    Ok(schema::comments::table
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

// Atomic delete-if-exists: existence is decided by the affected
// row count of a single DELETE statement, never by a separate
// lookup beforehand.
fn delete_comment(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::comments::dsl;
    let count = diesel::delete(schema::comments::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

impl From<models::CommentEntry> for Comment {
    fn from(from: models::CommentEntry) -> Self {
        let models::CommentEntry {
            rowid: _,
            id,
            created_at,
            text,
            created_by,
        } = from;
        Self {
            id: id.into(),
            created_at: Timestamp::from_millis(created_at),
            created_by: created_by.map(Into::into),
            text,
        }
    }
}
