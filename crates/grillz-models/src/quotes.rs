//! Estimate and offer DTOs.
//!
//! Shape-level checks (non-empty selection, email format, bounded text) are
//! declared here with `validator`. The cross-field rule that every per-tooth
//! entry refers to a selected tooth is enforced by the estimate service.

use std::collections::BTreeSet;
use std::fmt;

use grillz_core::serde::deserialize_optional_trimmed;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Which half of the mouth a quote covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Upper,
    Lower,
    Both,
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Upper => "upper",
            Arch::Lower => "lower",
            Arch::Both => "both",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum MetalType {
    /// Sterling silver.
    #[default]
    #[serde(rename = "s925")]
    S925,
}

impl MetalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetalType::S925 => "s925",
        }
    }
}

impl fmt::Display for MetalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct PerToothRequest {
    /// Stable tooth id like U1..U16, L1..L16
    #[validate(length(min = 1, max = 16, message = "tooth_id must be 1-16 characters"))]
    #[schema(example = "U1")]
    pub tooth_id: String,
    #[serde(default)]
    #[validate(length(max = 20, message = "at most 20 addons per tooth"))]
    #[schema(example = json!(["heart"]))]
    pub addons: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    #[validate(length(max = 500, message = "note must be at most 500 characters"))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct EstimateRequest {
    pub arch: Arch,
    #[validate(length(min = 1, message = "selected_teeth must contain at least one tooth"))]
    #[schema(example = json!(["U1", "U2"]))]
    pub selected_teeth: Vec<String>,
    #[serde(default)]
    pub metal_type: MetalType,
    #[serde(default)]
    #[validate(nested)]
    pub per_tooth: Vec<PerToothRequest>,
}

impl EstimateRequest {
    /// Number of distinct teeth selected. Repeated ids are charged once.
    pub fn tooth_count(&self) -> usize {
        self.selected_teeth
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn is_selected(&self, tooth_id: &str) -> bool {
        self.selected_teeth.iter().any(|t| t == tooth_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    #[schema(example = "Base (2 teeth)")]
    pub label: String,
    #[schema(value_type = f64, example = 100.0)]
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EstimateResponse {
    #[schema(example = "USD")]
    pub currency: String,
    #[schema(value_type = f64, example = 120.0)]
    pub total: Decimal,
    pub breakdown: Vec<LineItem>,
    pub disclaimer: String,
}

/// A customer asking for their configuration to be turned into an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendOfferRequest {
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "customer@example.com")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    #[validate(length(max = 200, message = "name must be at most 200 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    #[validate(length(max = 200, message = "instagram must be at most 200 characters"))]
    #[schema(example = "@grillz_fan")]
    pub instagram: Option<String>,
    #[validate(nested)]
    pub estimate: EstimateRequest,
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    #[validate(length(max = 2000, message = "client_notes must be at most 2000 characters"))]
    pub client_notes: Option<String>,
    /// Total the client displayed. Never used for pricing; the server
    /// recomputes the estimate and only logs a mismatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub quoted_total: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SendOfferResponse {
    pub ok: bool,
    #[schema(example = "USD")]
    pub currency: String,
    /// The recomputed total that was sent.
    #[schema(value_type = f64, example = 120.0)]
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn estimate(selected: &[&str]) -> EstimateRequest {
        EstimateRequest {
            arch: Arch::Upper,
            selected_teeth: selected.iter().map(|s| s.to_string()).collect(),
            metal_type: MetalType::S925,
            per_tooth: vec![],
        }
    }

    #[test]
    fn test_deserialize_minimal_estimate() {
        let request: EstimateRequest =
            serde_json::from_str(r#"{"arch": "both", "selected_teeth": ["U1"]}"#).unwrap();

        assert_eq!(request.arch, Arch::Both);
        assert_eq!(request.metal_type, MetalType::S925);
        assert!(request.per_tooth.is_empty());
    }

    #[test]
    fn test_unknown_arch_rejected() {
        let result: Result<EstimateRequest, _> =
            serde_json::from_str(r#"{"arch": "middle", "selected_teeth": ["U1"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_metal_rejected() {
        let result: Result<EstimateRequest, _> = serde_json::from_str(
            r#"{"arch": "upper", "selected_teeth": ["U1"], "metal_type": "gold"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_selection_fails_validation() {
        assert!(estimate(&[]).validate().is_err());
        assert!(estimate(&["U1"]).validate().is_ok());
    }

    #[test]
    fn test_nested_per_tooth_validation() {
        let mut request = estimate(&["U1"]);
        request.per_tooth.push(PerToothRequest {
            tooth_id: String::new(),
            addons: vec![],
            note: None,
        });
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_tooth_count_ignores_duplicates() {
        assert_eq!(estimate(&["U1", "U2", "U1"]).tooth_count(), 2);
        assert_eq!(estimate(&["L16"]).tooth_count(), 1);
    }

    #[test]
    fn test_send_offer_email_validation() {
        let mut offer = SendOfferRequest {
            email: "customer@example.com".to_string(),
            name: None,
            instagram: None,
            estimate: estimate(&["U1"]),
            client_notes: None,
            quoted_total: None,
        };
        assert!(offer.validate().is_ok());

        offer.email = "not-an-email".to_string();
        assert!(offer.validate().is_err());
    }

    #[test]
    fn test_send_offer_accepts_quoted_total() {
        let offer: SendOfferRequest = serde_json::from_str(
            r#"{
                "email": "customer@example.com",
                "name": "  ",
                "estimate": {"arch": "upper", "selected_teeth": ["U1"]},
                "quoted_total": 1.5
            }"#,
        )
        .unwrap();

        assert_eq!(offer.name, None);
        assert_eq!(offer.quoted_total, Some(dec!(1.5)));
    }

    #[test]
    fn test_amounts_serialize_as_numbers() {
        let item = LineItem::new("Add-ons", dec!(20.00));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["amount"], serde_json::json!(20.0));
    }
}
