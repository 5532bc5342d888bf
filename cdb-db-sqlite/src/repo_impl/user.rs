use cdb_core::repositories::UserRepo;

use super::*;

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn get_users_by_ids(&self, ids: &[&str]) -> Result<Vec<User>> {
        get_users_by_ids(&mut self.conn.borrow_mut(), ids)
    }
}

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: User) -> Result<()> {
        unreachable!();
    }
    fn get_users_by_ids(&self, ids: &[&str]) -> Result<Vec<User>> {
        get_users_by_ids(&mut self.conn.borrow_mut(), ids)
    }
}

fn create_user(conn: &mut SqliteConnection, user: User) -> Result<()> {
    let User { id, name } = user;
    let new_user = models::NewUser {
        id: id.into(),
        name,
    };
    let _count = diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn get_users_by_ids(conn: &mut SqliteConnection, ids: &[&str]) -> Result<Vec<User>> {
    use schema::users::dsl;
    Ok(schema::users::table
        .filter(dsl::id.eq_any(ids))
        .load::<models::UserEntry>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

impl From<models::UserEntry> for User {
    fn from(from: models::UserEntry) -> Self {
        let models::UserEntry { rowid: _, id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}
