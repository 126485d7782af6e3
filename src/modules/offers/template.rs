//! Plain-text bodies for offer emails.

use grillz_core::format_amount;
use grillz_models::{EstimateResponse, SendOfferRequest};

use crate::utils::email::OutgoingEmail;

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

pub fn offer_subject(payload: &SendOfferRequest) -> String {
    format!(
        "Grillz Offer ({} teeth, {})",
        payload.estimate.tooth_count(),
        payload.estimate.metal_type
    )
}

fn breakdown_lines(estimate: &EstimateResponse) -> Vec<String> {
    estimate
        .breakdown
        .iter()
        .map(|item| {
            format!(
                "  - {}: {} {}",
                item.label,
                estimate.currency,
                format_amount(item.amount)
            )
        })
        .collect()
}

fn total_line(estimate: &EstimateResponse) -> String {
    format!(
        "TOTAL ESTIMATE: {} {}",
        estimate.currency,
        format_amount(estimate.total)
    )
}

/// Body of the notification sent to the business owner. `estimate` must be
/// the server-side recomputation, never anything the client sent.
pub fn owner_body(payload: &SendOfferRequest, estimate: &EstimateResponse) -> String {
    let request = &payload.estimate;
    let mut lines = vec![
        "New Grillz Offer".to_string(),
        String::new(),
        format!("Customer email: {}", payload.email),
        format!("Name: {}", or_dash(payload.name.as_deref())),
        format!("Instagram: {}", or_dash(payload.instagram.as_deref())),
        String::new(),
        format!("Arch: {}", request.arch),
        format!("Metal: {}", request.metal_type),
        format!(
            "Selected teeth ({}): {}",
            request.tooth_count(),
            request.selected_teeth.join(", ")
        ),
        String::new(),
        "Per-tooth requests:".to_string(),
    ];

    if request.per_tooth.is_empty() {
        lines.push("  - None".to_string());
    } else {
        for tooth in &request.per_tooth {
            let addons = if tooth.addons.is_empty() {
                "-".to_string()
            } else {
                tooth.addons.join(", ")
            };
            lines.push(format!(
                "  - {}: addons={} | note={}",
                tooth.tooth_id,
                addons,
                or_dash(tooth.note.as_deref())
            ));
        }
    }

    lines.push(String::new());
    lines.push("Estimate breakdown:".to_string());
    lines.extend(breakdown_lines(estimate));
    lines.extend([
        String::new(),
        total_line(estimate),
        String::new(),
        format!("Disclaimer: {}", estimate.disclaimer),
        String::new(),
        "Client notes:".to_string(),
        or_dash(payload.client_notes.as_deref()).to_string(),
        String::new(),
        "Raw payload (JSON):".to_string(),
        serde_json::to_string_pretty(payload).unwrap_or_else(|e| format!("<unavailable: {}>", e)),
    ]);

    lines.join("\n")
}

/// Body of the optional copy sent to the customer.
pub fn customer_receipt_body(payload: &SendOfferRequest, estimate: &EstimateResponse) -> String {
    let mut lines = vec![
        format!("Hi {},", payload.name.as_deref().unwrap_or("there")),
        String::new(),
        "Thanks for your grillz request. Here is your estimate:".to_string(),
        String::new(),
    ];
    lines.extend(breakdown_lines(estimate));
    lines.extend([
        String::new(),
        total_line(estimate),
        String::new(),
        estimate.disclaimer.clone(),
        String::new(),
        "We will get back to you at this address once your request has been reviewed.".to_string(),
    ]);

    lines.join("\n")
}

pub fn owner_email(
    payload: &SendOfferRequest,
    estimate: &EstimateResponse,
    owner_address: &str,
) -> OutgoingEmail {
    OutgoingEmail {
        to: owner_address.to_string(),
        reply_to: Some(payload.email.clone()),
        subject: offer_subject(payload),
        body: owner_body(payload, estimate),
    }
}

pub fn customer_receipt(
    payload: &SendOfferRequest,
    estimate: &EstimateResponse,
    owner_address: &str,
) -> OutgoingEmail {
    OutgoingEmail {
        to: payload.email.clone(),
        reply_to: Some(owner_address.to_string()),
        subject: "Your Grillz estimate".to_string(),
        body: customer_receipt_body(payload, estimate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grillz_models::{Arch, EstimateRequest, LineItem, MetalType, PerToothRequest};
    use rust_decimal_macros::dec;

    fn payload(per_tooth: Vec<PerToothRequest>) -> SendOfferRequest {
        SendOfferRequest {
            email: "customer@example.com".to_string(),
            name: Some("Ada".to_string()),
            instagram: None,
            estimate: EstimateRequest {
                arch: Arch::Upper,
                selected_teeth: vec!["U1".to_string(), "U2".to_string()],
                metal_type: MetalType::S925,
                per_tooth,
            },
            client_notes: None,
            quoted_total: None,
        }
    }

    fn estimate() -> EstimateResponse {
        EstimateResponse {
            currency: "USD".to_string(),
            total: dec!(120),
            breakdown: vec![
                LineItem::new("Base (2 teeth)", dec!(100)),
                LineItem::new("Add-ons", dec!(20)),
            ],
            disclaimer: "Estimate only.".to_string(),
        }
    }

    #[test]
    fn test_subject() {
        assert_eq!(offer_subject(&payload(vec![])), "Grillz Offer (2 teeth, s925)");
    }

    #[test]
    fn test_owner_body_sections() {
        let body = owner_body(
            &payload(vec![PerToothRequest {
                tooth_id: "U1".to_string(),
                addons: vec!["heart".to_string(), "bar".to_string()],
                note: Some("left side".to_string()),
            }]),
            &estimate(),
        );

        assert!(body.starts_with("New Grillz Offer\n"));
        assert!(body.contains("Customer email: customer@example.com"));
        assert!(body.contains("Name: Ada"));
        assert!(body.contains("Instagram: -"));
        assert!(body.contains("Arch: upper"));
        assert!(body.contains("Metal: s925"));
        assert!(body.contains("Selected teeth (2): U1, U2"));
        assert!(body.contains("  - U1: addons=heart, bar | note=left side"));
        assert!(body.contains("  - Base (2 teeth): USD 100.00"));
        assert!(body.contains("  - Add-ons: USD 20.00"));
        assert!(body.contains("TOTAL ESTIMATE: USD 120.00"));
        assert!(body.contains("Disclaimer: Estimate only."));
        assert!(body.contains("Client notes:\n-"));
        assert!(body.contains("Raw payload (JSON):\n{"));
    }

    #[test]
    fn test_owner_body_without_per_tooth() {
        let body = owner_body(&payload(vec![]), &estimate());
        assert!(body.contains("Per-tooth requests:\n  - None"));
    }

    #[test]
    fn test_owner_email_replies_to_customer() {
        let email = owner_email(&payload(vec![]), &estimate(), "owner@example.com");
        assert_eq!(email.to, "owner@example.com");
        assert_eq!(email.reply_to.as_deref(), Some("customer@example.com"));
    }

    #[test]
    fn test_customer_receipt() {
        let email = customer_receipt(&payload(vec![]), &estimate(), "owner@example.com");

        assert_eq!(email.to, "customer@example.com");
        assert_eq!(email.reply_to.as_deref(), Some("owner@example.com"));
        assert!(email.body.starts_with("Hi Ada,"));
        assert!(email.body.contains("TOTAL ESTIMATE: USD 120.00"));
        assert!(!email.body.contains("Raw payload"));
    }
}
