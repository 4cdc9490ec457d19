//! HTTP front end: the router plus transport limits, served by hyper through axum.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};

use crate::api::{self, Api};

/// Largest request body accepted.
pub const MAX_BODY_BYTES: usize = 1 << 20;
/// Time allowed for the whole request, handler included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Time allowed for the client to finish sending its body.
pub const BODY_TIMEOUT: Duration = Duration::from_secs(10);

pub fn app(api: Arc<Api>) -> Router {
    api::router(api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(RequestBodyTimeoutLayer::new(BODY_TIMEOUT))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

/// Serves `app` until `shutdown` resolves, then drains open connections.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    log::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await
}
