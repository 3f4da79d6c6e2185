use crate::domain::{requests::product::ProductCreateInput, response::product::ProductView};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(&self, req: &ProductCreateInput) -> Result<ProductView, ServiceError>;
    async fn update_product(&self, req: &ProductView)
    -> Result<Option<ProductView>, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<bool, ServiceError>;
}
