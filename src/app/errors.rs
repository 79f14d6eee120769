use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError,
};

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    RequestTimeout,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
            Self::RequestTimeout => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "The request took too long to process.".to_string(),
            },
        }
    }
}

/// Converts errors raised by the middleware stack (timeouts, overload) into
/// an `ApiError` response. Used with `HandleErrorLayer`.
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::error!("request timed out");
        return DefaultApiError::RequestTimeout.value();
    }

    tracing::error!(%err, "unhandled middleware error");
    DefaultApiError::InternalServerError.value()
}

/// Panic handler for `CatchPanicLayer`, keeps the process alive and answers 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(%detail, "handler panicked");
    DefaultApiError::InternalServerError.value().into_response()
}
