//! Query-string extractor that reports failures as 422 `detail` bodies.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Like `axum::extract::Query`, but a non-numeric or negative value for an
/// unsigned parameter becomes a 422 instead of axum's plain-text 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct Page {
        #[serde(default)]
        skip: u64,
    }

    async fn handler(ValidatedQuery(page): ValidatedQuery<Page>) -> String {
        page.skip.to_string()
    }

    async fn status_for(uri: &str) -> StatusCode {
        Router::new()
            .route("/", get(handler))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_query_defaults_and_values() {
        assert_eq!(status_for("/").await, StatusCode::OK);
        assert_eq!(status_for("/?skip=3").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_query_rejections_are_422() {
        assert_eq!(status_for("/?skip=-1").await, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for("/?skip=abc").await, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
