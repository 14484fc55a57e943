use actix_web::{error::JsonPayloadError, error::ResponseError, http::StatusCode, HttpRequest, HttpResponse};
use derive_more::Display;
use serde_json::json;

use crate::database::GraphError;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Internal server error")]
    InternalError,

    #[display(fmt = "Bad request: {}", _0)]
    BadRequest(String),

    #[display(fmt = "Database error: {}", _0)]
    DatabaseError(String),
}

impl From<GraphError> for ApiError {
    fn from(error: GraphError) -> Self {
        log::error!("Graph store error: {}", error);
        match error {
            GraphError::Query(message) => ApiError::DatabaseError(message),
            GraphError::Decode(_) => ApiError::InternalError,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // The graph store sits upstream of this service.
            ApiError::DatabaseError(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InternalError => HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error"
            })),
            ApiError::BadRequest(ref message) => HttpResponse::BadRequest().json(json!({
                "error": message
            })),
            ApiError::DatabaseError(ref message) => HttpResponse::BadGateway().json(json!({
                "error": format!("Database error: {}", message)
            })),
        }
    }
}

/// Turns JSON extractor failures into the same `{"error": ..}` body as every other 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {}", err);
    ApiError::BadRequest(format!("Invalid request body: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DatabaseError("down".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_decode_error_maps_to_internal() {
        let error: ApiError = GraphError::Decode("bad property".to_string()).into();
        assert!(matches!(error, ApiError::InternalError));
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::BadRequest("too many".to_string()).to_string(),
            "Bad request: too many"
        );
    }
}
