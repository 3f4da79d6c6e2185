//! Field copies between the `products` row and the HTTP transfer shapes.

use crate::{
    domain::{requests::product::ProductCreateInput, response::product::ProductView},
    model::product::Product as ProductModel,
};
use rust_decimal::Decimal;

/// Scale of every stored price (`NUMERIC(18, 2)`).
pub const PRICE_SCALE: u32 = 2;

/// Converts whole currency units into a decimal carrying cents, `10 -> 10.00`.
pub fn price_from_units(units: i32) -> Decimal {
    Decimal::new(i64::from(units) * 100, PRICE_SCALE)
}

impl From<ProductModel> for ProductView {
    fn from(value: ProductModel) -> Self {
        ProductView {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<ProductView> for ProductModel {
    fn from(value: ProductView) -> Self {
        ProductModel {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

// id and timestamps are assigned by the database on insert
impl From<ProductCreateInput> for ProductModel {
    fn from(value: ProductCreateInput) -> Self {
        ProductModel {
            id: 0,
            name: value.name,
            description: value.description,
            price: price_from_units(value.price),
            created_at: None,
            updated_at: None,
        }
    }
}
