use crate::schema::*;

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment {
    pub id: String,
    pub created_at: i64,
    pub created_by: Option<i64>,
    pub text: String,
}

#[derive(Queryable)]
pub struct CommentEntry {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub text: String,
    // Joined column: public id of the referenced user
    pub created_by: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub id: String,
    pub name: String,
}

#[derive(Queryable)]
pub struct UserEntry {
    pub rowid: i64,
    pub id: String,
    pub name: String,
}
