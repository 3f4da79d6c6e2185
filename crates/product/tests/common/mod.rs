#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use product::{
    abstract_trait::product::repository::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
        ProductQueryRepositoryTrait,
    },
    handler::AppRouter,
    model::product::Product as ProductModel,
    repository::ProductRepository,
    state::AppState,
};
use shared::errors::RepositoryError;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::sync::Mutex;

/// Matches a `NUMERIC(18, 2)` column: half away from zero, always two places.
fn numeric_18_2(price: Decimal) -> Decimal {
    let mut stored = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    stored.rescale(2);
    stored
}

/// `products` table stand-in with the same id and timestamp rules as Postgres.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<Vec<ProductModel>>,
    last_id: Mutex<i32>,
    failing: AtomicBool,
}

impl InMemoryProductRepository {
    /// Makes every subsequent call fail like a dropped connection.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().await.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().await.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn create_product(
        &self,
        product: &ProductModel,
    ) -> Result<ProductModel, RepositoryError> {
        self.check()?;

        let mut last_id = self.last_id.lock().await;
        *last_id += 1;

        let row = ProductModel {
            id: *last_id,
            price: numeric_18_2(product.price),
            created_at: Some(Utc::now()),
            updated_at: None,
            ..product.clone()
        };
        self.rows.lock().await.push(row.clone());

        Ok(row)
    }

    async fn update_product(
        &self,
        product: &ProductModel,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        self.check()?;

        let mut rows = self.rows.lock().await;
        let Some(row) = rows.iter_mut().find(|p| p.id == product.id) else {
            return Ok(None);
        };

        let floor = row.updated_at.or(row.created_at);
        let now = Utc::now();

        row.name = product.name.clone();
        row.description = product.description.clone();
        row.price = numeric_18_2(product.price);
        row.updated_at = Some(floor.map_or(now, |f| f.max(now)));

        Ok(Some(row.clone()))
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        self.check()?;

        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);

        Ok(rows.len() < before)
    }
}

pub fn in_memory_repository() -> (Arc<InMemoryProductRepository>, ProductRepository) {
    let store = Arc::new(InMemoryProductRepository::default());

    let repository = ProductRepository {
        query: store.clone() as DynProductQueryRepository,
        command: store.clone() as DynProductCommandRepository,
    };

    (store, repository)
}

pub fn test_app() -> (Arc<InMemoryProductRepository>, Router) {
    let (store, repository) = in_memory_repository();
    let state = AppState::with_repository(repository);

    (store, AppRouter::build(Arc::new(state)))
}
