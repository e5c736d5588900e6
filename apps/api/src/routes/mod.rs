pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/recommend_jobs", post(handlers::handle_recommend_jobs))
        .route(
            "/api/v1/profiles/:id/recommendations",
            get(handlers::handle_profile_recommendations),
        )
        .with_state(state)
}
