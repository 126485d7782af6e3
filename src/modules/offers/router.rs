use std::sync::Arc;

use axum::{Router, routing::post};
use tower_governor::GovernorLayer;

use grillz_config::RateLimitConfig;

use crate::state::AppState;

use super::controller::send_offer;

pub fn init_offers_router(rate_limit: &RateLimitConfig) -> Router<AppState> {
    let router = Router::new().route("/send-offer", post(send_offer));

    match rate_limit.offer_governor_config() {
        Some(config) => router.layer(GovernorLayer::new(Arc::new(config))),
        None => {
            if rate_limit.enabled {
                tracing::warn!(?rate_limit, "Invalid offer rate limit, throttling disabled");
            }
            router
        }
    }
}
