use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::CartLineItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::CustomerId;

use super::entity::CartItemEntity;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_items(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<CartLineItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            "SELECT customer_id, product_id, product, quantity FROM cart_items WHERE customer_id = $1 ORDER BY created_at ASC",
        )
        .bind(customer_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn find_item(
        &self,
        customer_id: &CustomerId,
        product_id: u32,
    ) -> Result<Option<CartLineItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            "SELECT customer_id, product_id, product, quantity FROM cart_items WHERE customer_id = $1 AND product_id = $2",
        )
        .bind(customer_id.as_str())
        .bind(product_id as i64)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn save_item(
        &self,
        customer_id: &CustomerId,
        item: &CartLineItem,
    ) -> Result<(), RepositoryError> {
        let product = serde_json::to_value(&item.product)
            .map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO cart_items (customer_id, product_id, product, quantity)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (customer_id, product_id) DO UPDATE SET
                product = EXCLUDED.product,
                quantity = EXCLUDED.quantity"#,
        )
        .bind(customer_id.as_str())
        .bind(item.product.id as i64)
        .bind(product)
        .bind(item.quantity as i32)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn remove_item(
        &self,
        customer_id: &CustomerId,
        product_id: u32,
    ) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE customer_id = $1 AND product_id = $2")
            .bind(customer_id.as_str())
            .bind(product_id as i64)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn clear(&self, customer_id: &CustomerId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE customer_id = $1")
            .bind(customer_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
