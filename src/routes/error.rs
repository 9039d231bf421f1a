use std::{error::Error, fmt::Debug};

use actix_web::{error::{JsonPayloadError, PathError}, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::utils::error_fmt_chain;

// Error returned by every handler, rendered as `{"error": "..."}`
#[derive(thiserror::Error)]
pub enum ApiError{
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    ConflictError(String),
    #[error("{0}")]
    NotFoundError(String),
    #[error("Internal server error")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody{
    pub error: String
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::ConflictError(_) => StatusCode::CONFLICT,
            ApiError::NotFoundError(_) => StatusCode::NOT_FOUND,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        if let ApiError::UnexpectedError(e) = self {
            tracing::error!(error.cause_chain = ?e, "Request failed with an unexpected error");
        }

        HttpResponse::build(self.status_code())
            .json(ErrorBody{ error: self.to_string() })
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::ValidationError(format!("Invalid request body: {}", err)).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::NotFoundError(format!("Invalid path: {}", err)).into()
}
