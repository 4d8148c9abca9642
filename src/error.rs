use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason),
            AppError::NotFound(reason) => {
                debug!(reason = %reason, "Not found");
                (StatusCode::NOT_FOUND, "404 page not found".to_string())
            }
        };

        // String bodies are sent as text/plain; charset=utf-8
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn bad_request_carries_reason_as_plain_text() {
        let response = AppError::BadRequest("Invalid product ID".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_text(response).await, "Invalid product ID");
    }

    #[tokio::test]
    async fn not_found_uses_standard_body() {
        let response = AppError::NotFound("Product 9999 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "404 page not found");
    }
}
