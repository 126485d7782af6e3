use std::sync::Arc;

use grillz_config::{CorsConfig, EmailConfig, PricingConfig, RateLimitConfig};

use crate::utils::email::{Mailer, SmtpMailer};

/// Read-only configuration shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub pricing: Arc<PricingConfig>,
    pub email_config: Arc<EmailConfig>,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(
        pricing: PricingConfig,
        email_config: EmailConfig,
        cors_config: CorsConfig,
        rate_limit_config: RateLimitConfig,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            pricing: Arc::new(pricing),
            email_config: Arc::new(email_config),
            cors_config,
            rate_limit_config,
            mailer,
        }
    }
}

pub fn init_app_state() -> AppState {
    let email_config = EmailConfig::from_env();
    let mailer = Arc::new(SmtpMailer::new(email_config.clone()));

    AppState::new(
        PricingConfig::from_env(),
        email_config,
        CorsConfig::from_env(),
        RateLimitConfig::from_env(),
        mailer,
    )
}
