//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request, rejection::JsonRejection},
    http::header,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the body, then runs the `validator` rules. Any failure,
/// whether malformed JSON, a missing or mistyped field, or a rule violation,
/// is rejected with 422 and a `detail` list.
///
/// A body sent without a `Content-Type` header is still parsed as JSON. A
/// header naming anything other than JSON is rejected.
///
/// # Example
/// ```ignore
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(length(max = 255))]
///     name: String,
///     price: f64,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateItem>) -> String {
///     format!("Creating item: {}", payload.name)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = if req.headers().contains_key(header::CONTENT_TYPE) {
            Json::<T>::from_request(req, state).await?
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(JsonRejection::from)?;
            Json::<T>::from_bytes(&bytes)?
        };
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
