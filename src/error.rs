use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

pub struct InternalError {
    pub message: String,
}

impl InternalError {
    pub fn new(message: String) -> InternalError {
        InternalError { message }
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        error!("Error encountered while serving page: {}", self.message);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
