use axum::{
    body::Body,
    http::{Method, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use shared_models::AppError;

/// Default handler for unmatched paths and for known paths hit with an
/// unsupported method. Both answer `404 {"error": "Not Found"}`.
pub async fn not_found() -> AppError {
    AppError::route_not_found()
}

/// axum answers HEAD on every GET route implicitly. No route accepts HEAD,
/// so it gets the same 404 as any other unrouted method.
pub async fn reject_head(request: Request<Body>, next: Next) -> Response {
    if request.method() == Method::HEAD {
        return AppError::route_not_found().into_response();
    }
    next.run(request).await
}
