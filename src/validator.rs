use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use grillz_core::AppError;

/// Flattens field errors into `path: message` fragments, walking nested
/// structs and lists so `estimate.per_tooth[0].tooth_id` is reported too.
fn collect_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", path))
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_errors(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_errors(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_errors(errors, "", &mut messages);
    messages.sort();
    messages.join(", ")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::new(
                        StatusCode::BAD_REQUEST,
                        anyhow!("{} is required", field),
                    );
                }

                if error_msg.contains("unknown variant") {
                    return AppError::new(
                        StatusCode::BAD_REQUEST,
                        anyhow!("Unsupported value in request: {}", error_msg),
                    );
                }

                if error_msg.contains("invalid type") {
                    return AppError::new(
                        StatusCode::BAD_REQUEST,
                        anyhow!("Invalid field type in request"),
                    );
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::new(
                        StatusCode::BAD_REQUEST,
                        anyhow!("Missing 'Content-Type: application/json' header"),
                    );
                }

                AppError::new(StatusCode::BAD_REQUEST, anyhow!("Invalid request body"))
            })?;

        value.validate().map_err(|errors| {
            AppError::unprocessable(anyhow!("{}", format_errors(&errors)))
        })?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grillz_models::{Arch, EstimateRequest, MetalType, PerToothRequest, SendOfferRequest};

    fn offer() -> SendOfferRequest {
        SendOfferRequest {
            email: "customer@example.com".to_string(),
            name: None,
            instagram: None,
            estimate: EstimateRequest {
                arch: Arch::Upper,
                selected_teeth: vec!["U1".to_string()],
                metal_type: MetalType::S925,
                per_tooth: vec![],
            },
            client_notes: None,
            quoted_total: None,
        }
    }

    #[test]
    fn test_top_level_message() {
        let mut request = offer();
        request.email = "nope".to_string();
        let errors = request.validate().unwrap_err();

        assert_eq!(format_errors(&errors), "email must be a valid email address");
    }

    #[test]
    fn test_nested_messages_are_collected() {
        let mut request = offer();
        request.estimate.selected_teeth.clear();
        request.estimate.per_tooth.push(PerToothRequest {
            tooth_id: String::new(),
            addons: vec![],
            note: None,
        });
        let errors = request.validate().unwrap_err();

        let message = format_errors(&errors);
        assert!(message.contains("selected_teeth must contain at least one tooth"));
        assert!(message.contains("tooth_id must be 1-16 characters"));
    }
}
