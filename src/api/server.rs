use crate::api::routes;
use crate::config::SharedConfig;
use crate::error::Error;
use crate::runner::DynRunner;
use axum::Router;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub runner: DynRunner,
}

/// Build the API [`Router`] without binding it, e.g. to drive it directly in tests.
pub fn router(config: SharedConfig, runner: DynRunner) -> Router {
    routes::new(AppState { config, runner })
}

/// Bind [`Config::api_bind_addr`][crate::config::Config::api_bind_addr] and return the server
/// future. The server stops accepting connections once `shutdown` resolves and completes when
/// in-flight requests have finished.
///
/// # Errors
///
/// Returns [`Error::Server`] if the address can't be bound.
pub fn new(
    config: SharedConfig,
    runner: DynRunner,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<impl Future<Output = hyper::Result<()>>, Error> {
    let addr = config.api_bind_addr;
    Ok(axum::Server::try_bind(&addr)?
        .serve(router(config, runner).into_make_service())
        .with_graceful_shutdown(shutdown))
}
