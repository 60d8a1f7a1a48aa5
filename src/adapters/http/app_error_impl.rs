use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use waitlist_types::{ErrorBody, INTERNAL_ERROR_MESSAGE};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        if self.is_client_error() {
            tracing::info!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = ?self, "Request failed");
        }

        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => {
                error_resp(StatusCode::BAD_REQUEST, msg)
            }
            AppError::Database(_) | AppError::Internal(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        }
    }
}

fn error_resp(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { message })).into_response()
}
