use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum RepliesApiError {
    DispatchFailed,
    DispatchRejected(StatusCode),
}

impl RepliesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::DispatchFailed => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to send the reply.".to_string(),
            },
            Self::DispatchRejected(status) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: format!("Reply was rejected with {}.", status.as_u16()),
            },
        }
    }
}
