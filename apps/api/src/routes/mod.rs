pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::prediction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        .route("/predict", post(handlers::handle_predict))
        .route("/re-predict", post(handlers::handle_re_predict))
        .with_state(state)
}
