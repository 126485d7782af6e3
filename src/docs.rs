use utoipa::OpenApi;

use crate::utils::errors::ErrorResponse;
use grillz_models::{
    Arch, EstimateRequest, EstimateResponse, HealthResponse, LineItem, MetalType,
    PerToothRequest, SendOfferRequest, SendOfferResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health,
        crate::modules::estimates::controller::create_estimate,
        crate::modules::offers::controller::send_offer,
    ),
    components(
        schemas(
            Arch,
            MetalType,
            PerToothRequest,
            EstimateRequest,
            LineItem,
            EstimateResponse,
            SendOfferRequest,
            SendOfferResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Estimates", description = "Price estimates for a grillz configuration"),
        (name = "Offers", description = "Email a recomputed estimate to the shop")
    ),
    info(
        title = "Grillz Quote API",
        version = "0.1.0",
        description = "Computes itemized grillz estimates and emails offers to the shop.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
