use anyhow::anyhow;
use tracing::{instrument, warn};

use grillz_core::AppError;
use grillz_models::{SendOfferRequest, SendOfferResponse};

use crate::metrics::{track_estimate_rejected, track_offer_failed, track_offer_sent};
use crate::modules::estimates::EstimateService;
use crate::modules::offers::template::{customer_receipt, owner_email};
use crate::state::AppState;
use crate::utils::email::{MailError, deliver};

pub struct OfferService;

impl OfferService {
    /// Recomputes the estimate from the embedded request and emails it to the
    /// owner, plus a receipt to the customer when enabled. The owner email is
    /// required to succeed; the receipt is best effort.
    #[instrument(skip_all, fields(teeth = payload.estimate.selected_teeth.len()))]
    pub async fn send_offer(
        state: &AppState,
        payload: SendOfferRequest,
    ) -> Result<SendOfferResponse, AppError> {
        let estimate = EstimateService::recompute(&payload.estimate, &state.pricing).map_err(|e| {
            track_estimate_rejected();
            AppError::bad_request(e)
        })?;

        if let Some(quoted) = payload.quoted_total
            && quoted != estimate.total
        {
            warn!(
                quoted = %quoted,
                recomputed = %estimate.total,
                "Client-quoted total differs from recomputed estimate; using recomputed"
            );
        }

        let missing = state.email_config.missing_keys();
        let Some(owner_address) = state.email_config.owner_email.as_deref() else {
            return Err(AppError::internal(MailError::NotConfigured(missing)));
        };
        if !missing.is_empty() {
            return Err(AppError::internal(MailError::NotConfigured(missing)));
        }

        let owner = owner_email(&payload, &estimate, owner_address);
        deliver(state.mailer.clone(), owner).await.map_err(|e| {
            track_offer_failed("owner");
            tracing::error!(error = %e, "Failed to send offer email");
            send_error(e)
        })?;
        track_offer_sent("owner");

        if state.email_config.send_customer_receipt {
            let receipt = customer_receipt(&payload, &estimate, owner_address);
            match deliver(state.mailer.clone(), receipt).await {
                Ok(()) => track_offer_sent("customer"),
                Err(e) => {
                    track_offer_failed("customer");
                    warn!(error = %e, "Failed to send customer receipt");
                }
            }
        }

        tracing::info!(total = %estimate.total, "Offer sent");

        Ok(SendOfferResponse {
            ok: true,
            currency: estimate.currency,
            total: estimate.total,
        })
    }
}

fn send_error(err: MailError) -> AppError {
    match err {
        MailError::NotConfigured(_) => AppError::internal(err),
        other => AppError::bad_gateway(anyhow!("Failed to send email: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_send_error_mapping() {
        let not_configured = send_error(MailError::NotConfigured(vec!["SMTP_HOST"]));
        assert_eq!(not_configured.status, StatusCode::INTERNAL_SERVER_ERROR);

        let transport = send_error(MailError::Transport("timed out".to_string()));
        assert_eq!(transport.status, StatusCode::BAD_GATEWAY);
        assert_eq!(transport.message(), "Failed to send email: timed out");
    }
}
