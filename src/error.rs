use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use crate::sqlx::Error as SqlxError;
use crate::thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct Detail {
    detail: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Detail { detail: self.to_string() })
    }
}
