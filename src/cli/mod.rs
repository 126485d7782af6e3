//! Helpers behind the `grillz-cli` binary.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, anyhow};
use validator::Validate;

use grillz_config::{EmailConfig, PricingConfig};
use grillz_core::format_amount;
use grillz_models::{
    Arch, EstimateRequest, EstimateResponse, MetalType, PerToothRequest, SendOfferRequest,
};

use crate::modules::estimates::EstimateService;
use crate::validator::format_errors;

/// Reads an estimate request as JSON from `path`, or stdin when `None`.
pub fn read_estimate_request(path: Option<&Path>) -> anyhow::Result<EstimateRequest> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let request: EstimateRequest =
        serde_json::from_str(&raw).context("request is not a valid estimate")?;
    request
        .validate()
        .map_err(|errors| anyhow!("{}", format_errors(&errors)))?;

    Ok(request)
}

/// Validates and prices a request with the given table.
pub fn estimate(request: &EstimateRequest, pricing: &PricingConfig) -> anyhow::Result<EstimateResponse> {
    Ok(EstimateService::estimate(request, pricing)?)
}

pub fn render_estimate(estimate: &EstimateResponse) -> String {
    let width = estimate
        .breakdown
        .iter()
        .map(|item| item.label.len())
        .max()
        .unwrap_or(0)
        .max("Total".len());

    let mut lines: Vec<String> = estimate
        .breakdown
        .iter()
        .map(|item| {
            format!(
                "{:<width$}  {} {:>10}",
                item.label,
                estimate.currency,
                format_amount(item.amount)
            )
        })
        .collect();
    lines.push(format!(
        "{:<width$}  {} {:>10}",
        "Total",
        estimate.currency,
        format_amount(estimate.total)
    ));
    lines.push(String::new());
    lines.push(estimate.disclaimer.clone());

    lines.join("\n")
}

pub fn render_config(pricing: &PricingConfig, email: &EmailConfig) -> String {
    let mut lines = vec![
        format!("Currency:             {}", pricing.currency),
        format!("Base price per tooth: {}", format_amount(pricing.base_price_per_tooth)),
        format!("Arch fee (upper):     {}", format_amount(pricing.arch_fee_upper)),
        format!("Arch fee (lower):     {}", format_amount(pricing.arch_fee_lower)),
        "Add-ons:".to_string(),
    ];
    lines.extend(
        pricing
            .addon_prices
            .iter()
            .map(|(id, price)| format!("  {:<18} {}", id, format_amount(*price))),
    );
    lines.push(format!("Disclaimer:           {}", pricing.disclaimer));
    lines.push(String::new());

    let missing = email.missing_keys();
    if missing.is_empty() {
        lines.push(format!(
            "Email: configured ({}:{}, customer receipts {})",
            email.smtp_host.as_deref().unwrap_or_default(),
            email.smtp_port,
            if email.send_customer_receipt { "on" } else { "off" }
        ));
    } else {
        lines.push(format!("Email: not configured, missing {}", missing.join(", ")));
    }

    lines.join("\n")
}

/// A representative offer used to check mail delivery end to end.
pub fn sample_offer(customer_email: &str) -> SendOfferRequest {
    SendOfferRequest {
        email: customer_email.to_string(),
        name: Some("Test Customer".to_string()),
        instagram: None,
        estimate: EstimateRequest {
            arch: Arch::Upper,
            selected_teeth: vec!["U1".to_string(), "U2".to_string()],
            metal_type: MetalType::S925,
            per_tooth: vec![PerToothRequest {
                tooth_id: "U1".to_string(),
                addons: vec!["heart".to_string()],
                note: Some("Test offer from grillz-cli".to_string()),
            }],
        },
        client_notes: Some("This is a test message; no action needed.".to_string()),
        quoted_total: None,
    }
}
