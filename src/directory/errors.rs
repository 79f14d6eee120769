use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum DirectoryApiError {
    UpstreamUnreachable,
    UpstreamStatus(StatusCode),
    MalformedResponse,
}

impl DirectoryApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::UpstreamUnreachable => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to reach the directory source.".to_string(),
            },
            Self::UpstreamStatus(status) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: format!("Directory source responded with {}.", status.as_u16()),
            },
            Self::MalformedResponse => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to parse the directory source response.".to_string(),
            },
        }
    }
}
