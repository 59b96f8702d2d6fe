mod app;
mod handlers;
mod logic;
mod models;

use axum::Router;
use authgate_common::{bind_listener, env_or, init_tracing, shutdown_signal};

#[tokio::main]
async fn main() {
    let _guards = init_tracing("auth-service");

    let port = env_or("PORT", 5000u16);

    let app: Router = app::build_router();
    let listener = bind_listener(port).await;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("serve");
}
