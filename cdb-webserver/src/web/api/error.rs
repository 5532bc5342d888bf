use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

pub use cdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

use super::json_error_response;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        Self::Parameter(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Parameter(err) => match &err {
                ParameterError::Repo(RepoError::NotFound) => {
                    json_error_response(req, &err, Status::NotFound)
                }
                ParameterError::InvalidId | ParameterError::EmptyComment => {
                    json_error_response(req, &err, Status::BadRequest)
                }
                // Storage faults are logged with their full detail but
                // never echoed to the client.
                ParameterError::Repo(_) => {
                    error!("Repository fault: {err}");
                    json_error_response(req, &"Internal server error", Status::InternalServerError)
                }
            },
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &"Internal server error", Status::InternalServerError)
            }
        }
    }
}
