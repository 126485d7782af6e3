use axum::{Json, extract::State};
use tracing::instrument;

use grillz_core::AppError;
use grillz_models::{EstimateRequest, EstimateResponse};

use crate::metrics::{track_estimate_computed, track_estimate_rejected};
use crate::modules::estimates::service::EstimateService;
use crate::state::AppState;
use crate::utils::errors::ErrorResponse;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/estimate",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Itemized estimate", body = EstimateResponse),
        (status = 400, description = "Malformed body or per_tooth entry for an unselected tooth", body = ErrorResponse),
        (status = 422, description = "Schema validation failed", body = ErrorResponse)
    ),
    tag = "Estimates"
)]
#[instrument(skip_all)]
pub async fn create_estimate(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EstimateRequest>,
) -> Result<Json<EstimateResponse>, AppError> {
    let estimate = EstimateService::estimate(&request, &state.pricing).map_err(|e| {
        track_estimate_rejected();
        tracing::info!(tooth_id = %e.tooth_id(), "Estimate rejected");
        AppError::bad_request(e)
    })?;

    track_estimate_computed(request.arch.as_str());
    tracing::info!(total = %estimate.total, items = estimate.breakdown.len(), "Estimate computed");

    Ok(Json(estimate))
}
