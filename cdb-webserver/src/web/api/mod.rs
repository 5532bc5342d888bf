use std::{fmt::Display, result};

use cdb_boundary as json;
use rocket::{
    catch,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::Json,
    Request, Route,
};

use crate::web::sqlite;
use cdb_core::usecases;

mod comments;
mod error;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   comments   --- //
        comments::get_comments,
        comments::delete_comment,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = json::Error {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

// Clients always receive a well-formed JSON error body, also for
// unmatched routes and failures that bypass the `ApiError` responder.
#[catch(default)]
pub fn default_catcher(status: Status, _req: &Request<'_>) -> Json<json::Error> {
    Json(json::Error {
        http_status: status.code,
        message: status.reason_lossy().to_string(),
    })
}
