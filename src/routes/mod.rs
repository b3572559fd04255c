// HTTP routes: JSON API, dashboard assets, response header policy

mod assets;
mod http;

use axum::http::{HeaderValue, header};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::AppConfig;
use crate::store::SharedStore;

/// Sent on every response when `security.content_security_policy` is on.
pub const CONTENT_SECURITY_POLICY: &str = "default-src *; script-src * 'unsafe-inline' 'unsafe-eval'; style-src * 'unsafe-inline'; img-src * data:; font-src *; connect-src *;";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: SharedStore,
}

pub fn app(store: SharedStore, config: &AppConfig) -> Router {
    let state = AppState { store };
    let mut router = Router::new()
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/metrics", get(http::metrics_handler)) // GET /api/metrics
        .route("/api/history", get(http::history_handler)) // GET /api/history
        .route("/api/receive-metrics", post(http::receive_metrics_handler)) // POST /api/receive-metrics
        .route("/api/health", get(http::health_handler)); // GET /api/health

    if config.static_files.enabled {
        router = router
            .fallback_service(assets::serve_dir(&config.static_files.dir))
            .layer(middleware::from_fn(assets::javascript_content_type));
    }

    let mut router: Router = router.with_state(state);
    if config.security.content_security_policy {
        router = router.layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ));
    }
    router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
