use axum::{routing::post, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, catch_panic};

pub fn build_router() -> Router {
    Router::new()
        .route("/auth", post(auth))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(catch_panic))
}
