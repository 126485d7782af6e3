use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;

use grillz_quote::grillz_config::{CorsConfig, EmailConfig, PricingConfig, RateLimitConfig};
use grillz_quote::router::init_router;
use grillz_quote::state::AppState;
use grillz_quote::utils::email::{Mailer, RecordingMailer};

pub const OWNER_EMAIL: &str = "owner@grillz.test";

/// Prices used across the integration tests: base 50, no arch fees, heart 20.
pub fn test_pricing() -> PricingConfig {
    PricingConfig {
        base_price_per_tooth: Decimal::from(50),
        arch_fee_upper: Decimal::ZERO,
        arch_fee_lower: Decimal::ZERO,
        addon_prices: [("heart".to_string(), Decimal::from(20))].into_iter().collect(),
        ..PricingConfig::default()
    }
}

pub fn test_email_config() -> EmailConfig {
    EmailConfig {
        smtp_host: Some("smtp.grillz.test".to_string()),
        smtp_port: 587,
        smtp_username: Some("quotes@grillz.test".to_string()),
        smtp_password: Some("secret".to_string()),
        owner_email: Some(OWNER_EMAIL.to_string()),
        from_email: Some("quotes@grillz.test".to_string()),
        from_name: "Grillz Quotes".to_string(),
        send_customer_receipt: false,
        timeout_secs: 12,
    }
}

pub fn test_state(
    pricing: PricingConfig,
    email_config: EmailConfig,
    rate_limit: RateLimitConfig,
    mailer: Arc<dyn Mailer>,
) -> AppState {
    AppState::new(
        pricing,
        email_config,
        CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        rate_limit,
        mailer,
    )
}

/// Router with test pricing, complete mail config, no throttling, and a
/// recording mailer the caller can inspect.
#[allow(dead_code)]
pub fn setup_test_app() -> (axum::Router, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::new());
    let state = test_state(
        test_pricing(),
        test_email_config(),
        RateLimitConfig::disabled(),
        mailer.clone(),
    );
    (init_router(state), mailer)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
