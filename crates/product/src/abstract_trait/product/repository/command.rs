use crate::model::product::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Inserts `product`, ignoring its `id` and timestamps, and returns the stored row.
    async fn create_product(&self, product: &ProductModel)
    -> Result<ProductModel, RepositoryError>;
    /// Overwrites name, description and price of the row with `product.id`.
    /// Returns `None` when no such row exists.
    async fn update_product(
        &self,
        product: &ProductModel,
    ) -> Result<Option<ProductModel>, RepositoryError>;
    /// Returns `false` when no row with `id` existed.
    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError>;
}
