use crate::api::api_error::APIError;
use crate::error::Error;
use axum::async_trait;
use axum::body::{Bytes, HttpBody};
use axum::extract::FromRequest;
use axum::http::Request;
use axum::BoxError;
use serde::de::DeserializeOwned;

/// JSON request body extractor that, unlike [`axum::Json`], doesn't insist on a JSON
/// `Content-Type`. Clients of the tool endpoints commonly post JSON without one.
pub(super) struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    type Rejection = APIError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes).map_err(Error::InvalidRequestBody)?;
        Ok(JsonBody(value))
    }
}
