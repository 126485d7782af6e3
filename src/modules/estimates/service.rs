use rust_decimal::Decimal;
use tracing::instrument;

use grillz_config::PricingConfig;
use grillz_core::money::round_money;
use grillz_models::{Arch, EstimateRequest, EstimateResponse, LineItem};

/// The only failure the estimate core can detect on its own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("per_tooth tooth_id '{tooth_id}' is not in selected_teeth")]
    ToothNotSelected { tooth_id: String },
}

impl ValidationError {
    pub fn tooth_id(&self) -> &str {
        match self {
            ValidationError::ToothNotSelected { tooth_id } => tooth_id,
        }
    }
}

pub struct EstimateService;

impl EstimateService {
    /// Rejects per-tooth options for teeth that were not selected. The first
    /// offending entry in list order is reported.
    pub fn validate(request: &EstimateRequest) -> Result<(), ValidationError> {
        match request
            .per_tooth
            .iter()
            .find(|tooth| !request.is_selected(&tooth.tooth_id))
        {
            Some(tooth) => Err(ValidationError::ToothNotSelected {
                tooth_id: tooth.tooth_id.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Prices a validated request. Pure: no I/O, no clock, no randomness.
    pub fn calculate(request: &EstimateRequest, config: &PricingConfig) -> EstimateResponse {
        let tooth_count = request.tooth_count();
        let mut breakdown = Vec::with_capacity(3);

        let base = config.base_price_per_tooth * Decimal::from(tooth_count);
        breakdown.push(LineItem::new(base_label(tooth_count), round_money(base)));

        let arch_fee = round_money(arch_fee(request.arch, config));
        if !arch_fee.is_zero() {
            breakdown.push(LineItem::new(
                format!("Arch fee ({})", request.arch),
                arch_fee,
            ));
        }

        let addons = round_money(addons_total(request, config));
        if !addons.is_zero() {
            breakdown.push(LineItem::new("Add-ons", addons));
        }

        let total = round_money(breakdown.iter().map(|item| item.amount).sum());

        EstimateResponse {
            currency: config.currency.clone(),
            total,
            breakdown,
            disclaimer: config.disclaimer.clone(),
        }
    }

    #[instrument(skip_all, fields(arch = %request.arch, teeth = request.selected_teeth.len()))]
    pub fn estimate(
        request: &EstimateRequest,
        config: &PricingConfig,
    ) -> Result<EstimateResponse, ValidationError> {
        Self::validate(request)?;
        Ok(Self::calculate(request, config))
    }

    /// Server-side recomputation for anything that leaves the service
    /// (emails, receipts). Whatever total the client showed is ignored.
    pub fn recompute(
        request: &EstimateRequest,
        config: &PricingConfig,
    ) -> Result<EstimateResponse, ValidationError> {
        Self::estimate(request, config)
    }
}

fn base_label(tooth_count: usize) -> String {
    let noun = if tooth_count == 1 { "tooth" } else { "teeth" };
    format!("Base ({} {})", tooth_count, noun)
}

fn arch_fee(arch: Arch, config: &PricingConfig) -> Decimal {
    match arch {
        Arch::Upper => config.arch_fee_upper,
        Arch::Lower => config.arch_fee_lower,
        Arch::Both => config.arch_fee_upper + config.arch_fee_lower,
    }
}

fn addons_total(request: &EstimateRequest, config: &PricingConfig) -> Decimal {
    request
        .per_tooth
        .iter()
        .flat_map(|tooth| tooth.addons.iter())
        .map(|addon| config.addon_price(addon))
        .sum()
}
