use axum::{
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationError, ValidationErrors};

/// JSON body extractor that runs `Validate` before the handler sees the value.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    let payload = json!({
                        "error": "Invalid JSON",
                        "message": rejection.body_text(),
                    });
                    (rejection_status(&rejection), axum::Json(payload))
                })?;

        json_value.validate().map_err(|validation_errors| {
            let payload = json!({
                "error": "Validation failed",
                "message": format_validation_errors(&validation_errors),
                "details": format_validation_errors_detailed(&validation_errors)
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload))
        })?;

        Ok(Self(json_value))
    }
}

// Syntax and type errors in the body are both client errors.
fn rejection_status(rejection: &JsonRejection) -> StatusCode {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => rejection.status(),
        _ => StatusCode::BAD_REQUEST,
    }
}

fn describe(field: &str, error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "required" => format!("{field} is required"),
            "length" => "Invalid length".to_string(),
            "range" => "Value out of range".to_string(),
            _ => format!("Invalid {field}"),
        })
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            error_messages.push(format!("{field}: {}", describe(&field, error)));
        }
    }

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.sort();
        error_messages.join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors.iter().map(|e| describe(&field, e)).collect();
        error_map.insert(field.to_string(), json!(messages));
    }

    json!(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn sample_errors() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add(
            "name",
            ValidationError::new("required").with_message(Cow::Borrowed("Product name is required")),
        );
        errors.add("price", ValidationError::new("range"));
        errors
    }

    #[test]
    fn summary_joins_every_field_message() {
        let summary = format_validation_errors(&sample_errors());
        assert_eq!(
            summary,
            "name: Product name is required; price: Value out of range"
        );
    }

    #[test]
    fn details_are_keyed_by_field() {
        let details = format_validation_errors_detailed(&sample_errors());
        assert_eq!(details["name"][0], "Product name is required");
        assert_eq!(details["price"][0], "Value out of range");
    }
}
