use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::template::{NotFoundTemplate, Template};

pub mod health;
pub mod index;
pub mod theme;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            dark: template.is_dark(),
            light: template.is_light(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/menu.json", get(index::json))
        .route("/theme", post(theme::toggle))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}

/// Router plus the response layers the server runs with.
pub fn app(app_state: AppState) -> Router {
    router(app_state)
        // no-cache for HTML, long-lived cache for static files
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
