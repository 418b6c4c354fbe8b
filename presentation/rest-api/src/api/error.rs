use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Body returned when a request payload cannot be decoded into its DTO
/// (malformed JSON, missing field, wrong type, wrong content type).
pub fn invalid_body(err: poem::Error) -> Json<ErrorResponse> {
    tracing::debug!(error = %err, "rejected request body");
    Json(ErrorResponse::new("ValidationError", "request.invalid_body"))
}
