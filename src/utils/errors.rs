use serde::Serialize;
use utoipa::ToSchema;

pub use grillz_core::AppError;

/// Body of every non-2xx response, as rendered by [`AppError`].
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "per_tooth tooth_id 'U2' is not in selected_teeth")]
    pub error: String,
}
