use crate::domain::null_as_empty;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full product shape returned by reads and accepted by `PUT /products/{id}`.
///
/// `createdAt` and `updatedAt` are output only; values sent by a client are
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(default)]
    pub id: i32,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_written_as_a_json_number_with_its_scale() {
        let view = ProductView {
            id: 1,
            name: "Pen".into(),
            price: Decimal::new(1000, 2),
            ..Default::default()
        };

        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains(r#""price":10.00"#), "{json}");
    }

    #[test]
    fn price_is_read_from_integer_and_fractional_numbers() {
        let view: ProductView =
            serde_json::from_str(r#"{"name":"Pen","description":null,"price":12}"#).unwrap();
        assert_eq!(view.price, Decimal::from(12));
        assert_eq!(view.description, "");

        let view: ProductView = serde_json::from_str(r#"{"name":"Pen","price":4.99}"#).unwrap();
        assert_eq!(view.price, Decimal::new(499, 2));
    }
}
