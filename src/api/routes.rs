use crate::api::api_error::panic_response;
use crate::api::json_body::JsonBody;
use crate::api::model::PingResponse;
use crate::api::server::AppState;
use crate::tools::dig::DigRequest;
use crate::tools::mkpasswd::MkpasswdRequest;
use crate::tools::propagation::{self, PropagationRequest, PropagationResult};
use crate::tools::pwgen::PwgenRequest;
use crate::tools::uuidgen::UuidgenRequest;
use crate::tools::{self, ToolRequest, ToolResult};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/tools/dig", post(run_tool::<DigRequest>))
        .route("/tools/mkpasswd", post(run_tool::<MkpasswdRequest>))
        .route("/tools/pwgen", post(run_tool::<PwgenRequest>))
        .route("/tools/uuidgen", post(run_tool::<UuidgenRequest>))
        .route("/tools/propagation", post(check_propagation))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn ping() -> impl IntoResponse {
    (StatusCode::BAD_GATEWAY, Json(PingResponse { success: false }))
}

async fn run_tool<R>(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<R>,
) -> Json<ToolResult>
where
    R: ToolRequest + DeserializeOwned + Send + Sync + 'static,
{
    Json(tools::invoke(state.runner.as_ref(), &state.config, &payload).await)
}

async fn check_propagation(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PropagationRequest>,
) -> Json<PropagationResult> {
    let result = propagation::lookup(state.runner.as_ref(), &state.config, &payload).await;
    tracing::debug!("propagation check via {}", result.provider);
    Json(result)
}
