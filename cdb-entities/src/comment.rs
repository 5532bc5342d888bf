use crate::{id::*, time::*};

/// A single immutable comment.
///
/// Comments are never updated after creation. The only
/// permitted mutation is their permanent removal.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub created_at : Timestamp,
    pub created_by : Option<Id>,
    pub text       : String,
}
