use crate::{flag_or, non_empty, parsed_or};

pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 12;

/// SMTP and recipient settings for offer notifications.
///
/// Everything required for delivery is optional here so the service can
/// start without mail configured; [`EmailConfig::missing_keys`] reports what
/// still needs to be set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    /// The business inbox every offer is delivered to.
    pub owner_email: Option<String>,
    pub from_email: Option<String>,
    pub from_name: String,
    pub send_customer_receipt: bool,
    pub timeout_secs: u64,
}

impl EmailConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let smtp_username = non_empty(&lookup, "SMTP_USER");

        Self {
            smtp_host: non_empty(&lookup, "SMTP_HOST"),
            smtp_port: parsed_or(&lookup, "SMTP_PORT", DEFAULT_SMTP_PORT),
            smtp_password: non_empty(&lookup, "SMTP_PASS"),
            owner_email: non_empty(&lookup, "EMAIL_TO"),
            from_email: non_empty(&lookup, "EMAIL_FROM").or_else(|| smtp_username.clone()),
            smtp_username,
            from_name: non_empty(&lookup, "EMAIL_FROM_NAME")
                .unwrap_or_else(|| "Grillz Quotes".to_string()),
            send_customer_receipt: flag_or(&lookup, "OFFER_SEND_CUSTOMER_RECEIPT", false),
            timeout_secs: parsed_or(&lookup, "SMTP_TIMEOUT_SECS", DEFAULT_SMTP_TIMEOUT_SECS),
        }
    }

    /// Names of the variables that must be set before mail can be sent.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        [
            ("SMTP_HOST", &self.smtp_host),
            ("SMTP_USER", &self.smtp_username),
            ("SMTP_PASS", &self.smtp_password),
            ("EMAIL_TO", &self.owner_email),
            ("EMAIL_FROM", &self.from_email),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect()
    }

    pub fn is_configured(&self) -> bool {
        self.missing_keys().is_empty()
    }
}
