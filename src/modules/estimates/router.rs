use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::create_estimate;

pub fn init_estimates_router() -> Router<AppState> {
    Router::new().route("/estimate", post(create_estimate))
}
