//! Validation gate for product payloads.
//!
//! Runs before create and update, never before reads or deletes.
//! Presence follows truthiness: empty strings and a zero price count as
//! missing. `inStock` only has to be present, so `false` passes.
//!
//! The gate never mutates anything. It either hands back a typed
//! `ProductInput` or a `ValidationError` describing what was wrong.

use serde_json::{Map, Value};
use thiserror::Error;

use super::product::ProductInput;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a payload was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Body is not a JSON object
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// One or more required fields are absent or empty
    #[error("{message} (missing: {})", fields.join(", "))]
    MissingFields {
        message: &'static str,
        fields: Vec<&'static str>,
    },

    /// A field is present with the wrong JSON type
    #[error("Field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// Query parameter could not be used
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),
}

/// Which mutation the payload is for. Only changes the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

impl ValidationMode {
    fn missing_message(self) -> &'static str {
        match self {
            ValidationMode::Create => "All product fields are required",
            ValidationMode::Update => "All fields are required for update",
        }
    }
}

enum FieldCheck<T> {
    Ok(T),
    Missing,
    WrongType(&'static str),
}

/// Validate a raw request body.
///
/// The body is parsed here rather than by an extractor so that routes can
/// decide when the gate runs relative to their own lookups.
pub fn validate_product(body: &[u8], mode: ValidationMode) -> ValidationResult<ProductInput> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(ValidationError::MissingFields {
            message: mode.missing_message(),
            fields: REQUIRED_FIELDS.to_vec(),
        });
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ValidationError::InvalidBody(format!("malformed JSON: {}", e)))?;

    validate_value(&value, mode)
}

/// Validate an already-parsed payload.
pub fn validate_value(value: &Value, mode: ValidationMode) -> ValidationResult<ProductInput> {
    let obj = value.as_object().ok_or_else(|| {
        ValidationError::InvalidBody("expected a JSON object".to_string())
    })?;

    let name = text_field(obj, "name");
    let description = text_field(obj, "description");
    let price = price_field(obj);
    let category = text_field(obj, "category");
    let in_stock = in_stock_field(obj);

    let mut missing = Vec::new();
    let mut wrong_type = None;

    let checks: [(&'static str, bool, Option<&'static str>); 5] = [
        ("name", is_missing(&name), type_error(&name)),
        ("description", is_missing(&description), type_error(&description)),
        ("price", is_missing(&price), type_error(&price)),
        ("category", is_missing(&category), type_error(&category)),
        ("inStock", is_missing(&in_stock), type_error(&in_stock)),
    ];

    for (field, absent, bad_type) in checks {
        if absent {
            missing.push(field);
        } else if let (Some(expected), None) = (bad_type, wrong_type) {
            wrong_type = Some((field, expected));
        }
    }

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields {
            message: mode.missing_message(),
            fields: missing,
        });
    }

    if let Some((field, expected)) = wrong_type {
        return Err(ValidationError::WrongType { field, expected });
    }

    match (name, description, price, category, in_stock) {
        (
            FieldCheck::Ok(name),
            FieldCheck::Ok(description),
            FieldCheck::Ok(price),
            FieldCheck::Ok(category),
            FieldCheck::Ok(in_stock),
        ) => Ok(ProductInput {
            name,
            description,
            price,
            category,
            in_stock,
        }),
        // Every non-Ok case returned above
        _ => Err(ValidationError::InvalidBody("unreadable product".to_string())),
    }
}

const REQUIRED_FIELDS: [&str; 5] = ["name", "description", "price", "category", "inStock"];

fn is_missing<T>(check: &FieldCheck<T>) -> bool {
    matches!(check, FieldCheck::Missing)
}

fn type_error<T>(check: &FieldCheck<T>) -> Option<&'static str> {
    match check {
        FieldCheck::WrongType(expected) => Some(*expected),
        _ => None,
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> FieldCheck<String> {
    match obj.get(key) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => FieldCheck::Missing,
        Some(Value::String(s)) if s.is_empty() => FieldCheck::Missing,
        Some(Value::String(s)) => FieldCheck::Ok(s.clone()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => FieldCheck::Missing,
        Some(_) => FieldCheck::WrongType("a non-empty string"),
    }
}

fn price_field(obj: &Map<String, Value>) -> FieldCheck<f64> {
    match obj.get("price") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => FieldCheck::Missing,
        Some(Value::String(s)) if s.is_empty() => FieldCheck::Missing,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(p) if p == 0.0 => FieldCheck::Missing,
            Some(p) => FieldCheck::Ok(p),
            None => FieldCheck::WrongType("a number"),
        },
        Some(_) => FieldCheck::WrongType("a number"),
    }
}

fn in_stock_field(obj: &Map<String, Value>) -> FieldCheck<bool> {
    match obj.get("inStock") {
        None | Some(Value::Null) => FieldCheck::Missing,
        Some(Value::Bool(b)) => FieldCheck::Ok(*b),
        Some(_) => FieldCheck::WrongType("a boolean"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full() -> Value {
        json!({
            "name": "Blender",
            "description": "600W blender",
            "price": 79.5,
            "category": "kitchen",
            "inStock": true
        })
    }

    fn without(field: &str) -> Value {
        let mut value = full();
        value.as_object_mut().unwrap().remove(field);
        value
    }

    #[test]
    fn test_valid_payload_passes() {
        let input = validate_value(&full(), ValidationMode::Create).unwrap();
        assert_eq!(input.name, "Blender");
        assert_eq!(input.price, 79.5);
        assert!(input.in_stock);
    }

    #[test]
    fn test_in_stock_false_is_present() {
        let mut value = full();
        value["inStock"] = json!(false);
        let input = validate_value(&value, ValidationMode::Create).unwrap();
        assert!(!input.in_stock);
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        for field in REQUIRED_FIELDS {
            let result = validate_value(&without(field), ValidationMode::Create);
            match result {
                Err(ValidationError::MissingFields { fields, .. }) => {
                    assert_eq!(fields, vec![field]);
                }
                other => panic!("expected missing {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        let value = json!({
            "name": "",
            "description": "ok",
            "price": 0,
            "category": "kitchen",
            "inStock": null
        });
        let err = validate_value(&value, ValidationMode::Update).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                message: "All fields are required for update",
                fields: vec!["name", "price", "inStock"],
            }
        );
    }

    #[test]
    fn test_negative_price_is_allowed() {
        let mut value = full();
        value["price"] = json!(-5);
        let input = validate_value(&value, ValidationMode::Create).unwrap();
        assert_eq!(input.price, -5.0);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let mut value = full();
        value["inStock"] = json!("yes");
        let err = validate_value(&value, ValidationMode::Create).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                field: "inStock",
                expected: "a boolean"
            }
        );

        let mut value = full();
        value["price"] = json!("12");
        assert!(matches!(
            validate_value(&value, ValidationMode::Create),
            Err(ValidationError::WrongType { field: "price", .. })
        ));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut value = full();
        value["id"] = json!("client-chosen");
        value["colour"] = json!("red");
        assert!(validate_value(&value, ValidationMode::Create).is_ok());
    }

    #[test]
    fn test_raw_body_handling() {
        let body = serde_json::to_vec(&full()).unwrap();
        assert!(validate_product(&body, ValidationMode::Create).is_ok());

        assert!(matches!(
            validate_product(b"not json", ValidationMode::Create),
            Err(ValidationError::InvalidBody(_))
        ));
        assert!(matches!(
            validate_product(b"[1, 2]", ValidationMode::Create),
            Err(ValidationError::InvalidBody(_))
        ));
        match validate_product(b"", ValidationMode::Create) {
            Err(ValidationError::MissingFields { fields, .. }) => assert_eq!(fields.len(), 5),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_message_names_missing_fields() {
        let err = validate_value(&without("category"), ValidationMode::Create).unwrap_err();
        assert_eq!(
            err.to_string(),
            "All product fields are required (missing: category)"
        );
    }
}
