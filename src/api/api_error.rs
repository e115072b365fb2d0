use crate::api::model::ErrorResponse;
use crate::error::Error;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;

pub(crate) struct APIError(anyhow::Error);

impl APIError {
    fn status(&self) -> StatusCode {
        if let Some(rejection) = self.0.downcast_ref::<BytesRejection>() {
            return rejection.status();
        }
        match self.0.downcast_ref::<Error>() {
            Some(Error::InvalidRequestBody(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self.0.downcast_ref::<BytesRejection>() {
            Some(rejection) => rejection.body_text(),
            None => format!("{:#}", self.0),
        };
        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

impl<E> From<E> for APIError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Response for a handler that panicked, in the same envelope as every other API error.
pub(super) fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("handler panicked: {detail}");
    let body = Json(ErrorResponse::new("internal error".to_string()));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
