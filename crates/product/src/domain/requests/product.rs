use crate::domain::null_as_empty;
use serde::{Deserialize, Serialize};

/// Body of `POST /products`. `price` is in whole currency units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default)]
    pub price: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_description_become_empty() {
        let input: ProductCreateInput =
            serde_json::from_str(r#"{"name":"Pen","description":null,"price":10}"#).unwrap();
        assert_eq!(input.description, "");

        let input: ProductCreateInput = serde_json::from_str(r#"{"name":"Pen"}"#).unwrap();
        assert_eq!(input.description, "");
        assert_eq!(input.price, 0);
    }
}
