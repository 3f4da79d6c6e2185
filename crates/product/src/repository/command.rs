use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &ProductModel,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, description, price, created_at)
            VALUES ($1, $2, $3, now())
            RETURNING id, name, description, price, created_at, updated_at
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn update_product(
        &self,
        product: &ProductModel,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // updated_at never moves backwards, even across clock adjustments
        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                updated_at = GREATEST(now(), COALESCE(updated_at, created_at))
            WHERE id = $1
            RETURNING id, name, description, price, created_at, updated_at
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", product.id, err);
            RepositoryError::from(err)
        })?;

        match &result {
            Some(updated) => info!("🔄 Updated product ID {}", updated.id),
            None => warn!("⚠️ No product with ID {} to update", product.id),
        }

        Ok(result)
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("❌ Deleting product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("✅ Product ID {} deleted", id);
        } else {
            warn!("⚠️ No product with ID {} to delete", id);
        }

        Ok(deleted)
    }
}
