//! Embedded Leptos frontend.
//!
//! `ui/dist` is baked into the binary at compile time. Unknown paths fall back
//! to `index.html` so client-side routes survive a page reload.

use axum::{
    body::Body,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "ui/dist"]
struct Assets;

const INDEX: &str = "index.html";

/// Axum fallback handler serving the single-page app.
pub async fn serve_ui(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    match Assets::get(path) {
        Some(file) => asset_response(path, file.data.into_owned()),
        None if path.starts_with("api/") => StatusCode::NOT_FOUND.into_response(),
        None => match Assets::get(INDEX) {
            Some(index) => asset_response(INDEX, index.data.into_owned()),
            None => (
                StatusCode::NOT_FOUND,
                "UI assets are missing. Build the frontend with `trunk build --release` in ui/.",
            )
                .into_response(),
        },
    }
}

fn asset_response(path: &str, bytes: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let cache = if path == INDEX {
        "no-cache"
    } else {
        "public, max-age=31536000, immutable"
    };

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache)
        .body(Body::from(bytes))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
