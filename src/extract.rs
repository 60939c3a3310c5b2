//! Request extractors

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::AppError;

/// JSON body extractor that reports malformed or incomplete bodies through
/// the application's error envelope.
///
/// Axum's stock `Json` rejects with a plain-text 422; missing or mistyped
/// fields are validation failures here, so they surface as
/// [`AppError::Validation`] (400) like every other bad input.
#[derive(Debug, Clone, Copy)]
pub struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::StatusCode};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        language: String,
        #[allow(dead_code)]
        code: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_field_is_a_validation_error() {
        let request = json_request(r#"{"language": "python"}"#);

        let err = Json::<Payload>::from_request(request, &()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_validation_error() {
        let request = json_request("{not json");

        let err = Json::<Payload>::from_request(request, &()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_complete_body_deserializes() {
        let request = json_request(r#"{"language": "python", "code": "print(1)"}"#);

        let Json(payload) = Json::<Payload>::from_request(request, &()).await.unwrap();
        assert_eq!(payload.language, "python");
    }
}
