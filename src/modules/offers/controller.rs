use axum::{Json, extract::State};
use tracing::instrument;

use grillz_core::AppError;
use grillz_models::{SendOfferRequest, SendOfferResponse};

use crate::modules::offers::service::OfferService;
use crate::state::AppState;
use crate::utils::errors::ErrorResponse;
use crate::validator::ValidatedJson;

/// Emails the offer to the owner (and optionally a receipt to the customer).
///
/// The estimate is always recomputed server-side from `estimate`; any total
/// supplied by the client is ignored.
#[utoipa::path(
    post,
    path = "/send-offer",
    request_body = SendOfferRequest,
    responses(
        (status = 200, description = "Offer sent", body = SendOfferResponse),
        (status = 400, description = "Malformed body or per_tooth entry for an unselected tooth", body = ErrorResponse),
        (status = 422, description = "Schema validation failed", body = ErrorResponse),
        (status = 429, description = "Too many offers from this client"),
        (status = 500, description = "Email is not configured", body = ErrorResponse),
        (status = 502, description = "SMTP relay failed", body = ErrorResponse)
    ),
    tag = "Offers"
)]
#[instrument(skip_all)]
pub async fn send_offer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SendOfferRequest>,
) -> Result<Json<SendOfferResponse>, AppError> {
    let response = OfferService::send_offer(&state, payload).await?;
    Ok(Json(response))
}
