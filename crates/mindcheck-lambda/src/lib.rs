//! mindcheck-lambda
//!
//! HTTP surface of the screening service. The router is built here so it can
//! be driven in-process by tests; `main` wraps it in `lambda_http`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route(
            "/questions",
            get(routes::questions::list_questions).post(routes::questions::create_questions),
        )
        .route("/sessions", post(routes::sessions::create_session))
        .route("/sessions/{id}", get(routes::sessions::get_progress))
        .route(
            "/sessions/{id}/answers",
            post(routes::sessions::submit_answer),
        )
        .route("/sessions/{id}/result", get(routes::sessions::get_result))
        .route("/profile/sessions", get(routes::profile::list_sessions))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        // Public
        .route("/health", get(routes::health::health_check))
        .route("/categories", get(routes::categories::list_categories))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
