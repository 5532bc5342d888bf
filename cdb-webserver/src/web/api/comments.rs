use rocket::{delete, get, http::Status as HttpStatus};

use super::*;

#[get("/comments?<expand>")]
pub fn get_comments(db: sqlite::Connections, expand: Option<&str>) -> Result<Vec<json::Comment>> {
    let db = db.shared()?;
    let comments: Vec<json::Comment> = if expand == Some("created_by") {
        usecases::load_comments_with_authors(&db)?
            .into_iter()
            .map(Into::into)
            .collect()
    } else {
        usecases::load_comments(&db)?
            .into_iter()
            .map(Into::into)
            .collect()
    };
    Ok(Json(comments))
}

#[delete("/comments/<id>")]
pub fn delete_comment(db: sqlite::Connections, id: &str) -> StatusResult {
    usecases::delete_comment(&db.exclusive()?, id)?;
    Ok(HttpStatus::NoContent)
}
