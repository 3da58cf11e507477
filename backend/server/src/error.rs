use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use form::{ValidationState, validation::SUBMIT_FAILURE};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Unknown topping {0}")]
    UnknownTopping(u32),

    #[error("{message}", message = SUBMIT_FAILURE)]
    Rejected(ValidationState),

    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ValidationState>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload | AppError::UnknownTopping(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        let errors = match self {
            AppError::Rejected(errors) => Some(errors),
            _ => None,
        };

        (status, Json(ErrorBody { message, errors })).into_response()
    }
}
