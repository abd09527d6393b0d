use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("invalid submission: {0}")]
    Validation(String),

    #[error("storage failure: {0}")]
    Persistence(String),

    #[error("roast generation failed: {0}")]
    Generation(String),

    #[error("roast not found")]
    NotFound,
}

impl AppError {
    /// Generic client-facing message. Internal detail stays in the logs.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(_) => "Your submission is missing something. Check the required fields and try again.",
            Self::Persistence(_) => "Something went wrong saving your roast. Try again later.",
            Self::Generation(_) => "Failed to generate a roast. Try again in a bit.",
            Self::NotFound => "That roast doesn't exist.",
        }
    }
}

mod http_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        error: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let (status, error) = match &self {
                // Validation detail is user-correctable, so it goes out as-is.
                AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                AppError::Persistence(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, self.user_message().to_string())
                }
                AppError::Generation(_) => {
                    (StatusCode::BAD_GATEWAY, self.user_message().to_string())
                }
                AppError::NotFound => (StatusCode::NOT_FOUND, self.user_message().to_string()),
            };
            (status, Json(ErrorResponse { error })).into_response()
        }
    }
}
