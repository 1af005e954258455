//! Route definitions for the hedgehog catalog.
//!
//! ## Routes
//!
//! - `GET /` - List all hedgehogs
//! - `GET /new` - Empty create form
//! - `POST /create` - Create a hedgehog
//! - `GET /health` - Health check (JSON)
//! - `GET /{id}` - Detail page
//! - `POST /{id}` - Update a hedgehog
//! - `GET /edit/{id}` - Prefilled edit form
//! - `GET /destroy/{id}` - Delete a hedgehog

mod health;
mod hedgehogs;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::middleware;
use axum::response::Response;
use axum::routing::{get, post};

use crate::render::CSP_HEADER;
use crate::state::AppState;

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hedgehogs::index))
        .route("/new", get(hedgehogs::new_form))
        .route("/create", post(hedgehogs::create))
        .route("/health", get(health::health_check))
        .route("/{id}", get(hedgehogs::show).post(hedgehogs::update))
        .route("/edit/{id}", get(hedgehogs::edit_form))
        .route("/destroy/{id}", get(hedgehogs::destroy))
        .layer(middleware::map_response(security_headers))
        .with_state(state)
}

/// Add security headers to every response.
///
/// Pages embed per-session flash messages, so they must not be cached.
async fn security_headers(response: Response) -> Response {
    let (mut parts, body) = response.into_parts();

    parts.headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    parts.headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    parts
        .headers
        .insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    let is_html = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html"));
    if is_html {
        parts
            .headers
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }

    Response::from_parts(parts, body)
}
