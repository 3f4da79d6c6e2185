use crate::domain::response::product::ProductView;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductView>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductView>, ServiceError>;
}
