use crate::id::*;

/// Author of a comment, referenced by id.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id   : Id,
    pub name : String,
}
