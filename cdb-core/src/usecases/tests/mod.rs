use std::cell::RefCell;

use anyhow::anyhow;

use super::prelude::*;
use crate::{repositories, usecases};

#[derive(Default)]
pub struct MockDb {
    pub comments: RefCell<Vec<Comment>>,
    pub users: RefCell<Vec<User>>,
    pub fail_next: RefCell<bool>,
}

impl MockDb {
    fn check_fault(&self) -> Result<()> {
        if *self.fail_next.borrow() {
            return Err(repositories::Error::Other(anyhow!("connection lost")).into());
        }
        Ok(())
    }
}

type RepoResult<T> = std::result::Result<T, repositories::Error>;

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        self.check_fault().map_err(unwrap_repo_err)?;
        if self.comments.borrow().iter().any(|c| c.id == comment.id) {
            return Err(repositories::Error::AlreadyExists);
        }
        self.comments.borrow_mut().push(comment);
        Ok(())
    }
    fn all_comments(&self) -> RepoResult<Vec<Comment>> {
        self.check_fault().map_err(unwrap_repo_err)?;
        let mut comments = self.comments.borrow().clone();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }
    fn count_comments(&self) -> RepoResult<usize> {
        Ok(self.comments.borrow().len())
    }
    fn delete_comment(&self, id: &str) -> RepoResult<()> {
        self.check_fault().map_err(unwrap_repo_err)?;
        let mut comments = self.comments.borrow_mut();
        let len_before = comments.len();
        comments.retain(|c| c.id.as_str() != id);
        if comments.len() == len_before {
            return Err(repositories::Error::NotFound);
        }
        Ok(())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: User) -> RepoResult<()> {
        self.users.borrow_mut().push(user);
        Ok(())
    }
    fn get_users_by_ids(&self, ids: &[&str]) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| ids.contains(&u.id.as_str()))
            .cloned()
            .collect())
    }
}

fn unwrap_repo_err(err: Error) -> repositories::Error {
    match err {
        Error::Repo(err) => err,
        _ => unreachable!(),
    }
}

fn seed(db: &MockDb, id: &str, created_at: i64) {
    db.comments.borrow_mut().push(
        Comment::build()
            .id(id)
            .created_at(created_at)
            .text("lorem ipsum")
            .finish(),
    );
}

#[test]
fn load_comments_newest_first() {
    let db = MockDb::default();
    seed(&db, "a", 100);
    seed(&db, "c", 300);
    seed(&db, "b", 200);
    let comments = usecases::load_comments(&db).unwrap();
    let ids: Vec<_> = comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
    assert!(comments
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[test]
fn load_comments_returns_all_stored_ids() {
    let db = MockDb::default();
    for id in ["x", "y", "z"] {
        seed(&db, id, 0);
    }
    let mut ids: Vec<_> = usecases::load_comments(&db)
        .unwrap()
        .into_iter()
        .map(|c| String::from(c.id))
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["x", "y", "z"]);
}

#[test]
fn load_comments_from_empty_db() {
    let db = MockDb::default();
    assert!(usecases::load_comments(&db).unwrap().is_empty());
}

#[test]
fn resolve_comment_authors() {
    let db = MockDb::default();
    db.users
        .borrow_mut()
        .push(User::build().id("u1").name("alice").finish());
    db.comments.borrow_mut().push(
        Comment::build()
            .id("c1")
            .created_at(2)
            .created_by("u1")
            .text("hi")
            .finish(),
    );
    db.comments.borrow_mut().push(
        Comment::build()
            .id("c2")
            .created_at(1)
            .created_by("missing")
            .text("orphaned")
            .finish(),
    );
    seed(&db, "c3", 0);

    let comments = usecases::load_comments_with_authors(&db).unwrap();
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[0].1.as_deref(), Some("alice"));
    // Dangling user reference resolves to no author
    assert_eq!(comments[1].1, None);
    assert_eq!(comments[2].1, None);
}

#[test]
fn delete_existing_comment() {
    let db = MockDb::default();
    seed(&db, "a", 1);
    seed(&db, "b", 2);
    assert!(usecases::delete_comment(&db, "a").is_ok());
    let ids: Vec<_> = usecases::load_comments(&db)
        .unwrap()
        .into_iter()
        .map(|c| String::from(c.id))
        .collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn delete_comment_twice() {
    let db = MockDb::default();
    seed(&db, "a", 1);
    assert!(usecases::delete_comment(&db, "a").is_ok());
    assert!(matches!(
        usecases::delete_comment(&db, "a"),
        Err(Error::Repo(repositories::Error::NotFound))
    ));
}

#[test]
fn delete_missing_comment_keeps_storage_unchanged() {
    let db = MockDb::default();
    seed(&db, "a", 1);
    assert!(matches!(
        usecases::delete_comment(&db, "nonexistent"),
        Err(Error::Repo(repositories::Error::NotFound))
    ));
    assert_eq!(db.count_comments().unwrap(), 1);
}

#[test]
fn delete_comment_with_blank_id() {
    let db = MockDb::default();
    assert!(matches!(
        usecases::delete_comment(&db, "  "),
        Err(Error::InvalidId)
    ));
}

#[test]
fn create_comment_with_empty_text() {
    let db = MockDb::default();
    let new_comment = usecases::NewComment {
        text: "  \n ".into(),
        created_by: None,
    };
    assert!(matches!(
        usecases::create_comment(&db, new_comment),
        Err(Error::EmptyComment)
    ));
    assert_eq!(db.count_comments().unwrap(), 0);
}

#[test]
fn create_comment_assigns_id_and_timestamp() {
    let db = MockDb::default();
    let new_comment = usecases::NewComment {
        text: "hello".into(),
        created_by: Some("u1".into()),
    };
    let id = usecases::create_comment(&db, new_comment).unwrap();
    let comments = usecases::load_comments(&db).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, id);
    assert_eq!(comments[0].created_by, Some("u1".into()));
}

#[test]
fn storage_fault_leaves_data_unchanged() {
    let db = MockDb::default();
    seed(&db, "a", 1);
    *db.fail_next.borrow_mut() = true;
    assert!(matches!(
        usecases::delete_comment(&db, "a"),
        Err(Error::Repo(repositories::Error::Other(_)))
    ));
    assert!(matches!(
        usecases::load_comments(&db),
        Err(Error::Repo(repositories::Error::Other(_)))
    ));
    *db.fail_next.borrow_mut() = false;
    assert_eq!(db.count_comments().unwrap(), 1);
}
