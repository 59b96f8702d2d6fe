use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::logic::{evaluate, AuthOutcome};
use crate::models::{AuthRequest, MessageResponse};

pub async fn auth(payload: Result<Json<AuthRequest>, JsonRejection>) -> impl IntoResponse {
    let outcome = match payload {
        Ok(Json(request)) => evaluate(&request),
        Err(rejection) => {
            // Absent, non-JSON, or mistyped bodies all land here.
            tracing::debug!(error = %rejection, "request body rejected");
            AuthOutcome::MalformedBody
        }
    };

    tracing::info!(outcome = outcome.as_str(), "authentication decision");

    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (
        status,
        Json(MessageResponse {
            message: outcome.message(),
        }),
    )
}

pub fn catch_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "<unknown panic payload>"
    };
    tracing::error!(detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse {
            message: "An internal server error occurred.",
        }),
    )
        .into_response()
}
