//! Route registration — module routes plus system endpoints and the
//! browser shell.

use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;

/// Build the complete router. Module routes are already `Router<()>` (state
/// applied internally); each mounts under /{module_name}.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    for (name, router) in module_routes {
        app = app.nest(&format!("/{}", name), router);
    }

    // Any other path serves the single-page shell; the browser app routes
    // from there.
    app.fallback(index_page)
}

async fn index_page() -> impl IntoResponse {
    Html(include_str!("web/index.html"))
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "seedstockd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
