use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::CustomerId;

use super::entity::OrderEntity;

const ORDER_COLUMNS: &str = "id, customer_id, items, subtotal, tax, shipping, total, status, \
                             shipping_address, payment_method, order_date, estimated_delivery";

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_all(&self, customer_id: &CustomerId) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE customer_id = $1 ORDER BY order_date DESC",
        ))
        .bind(customer_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(
        &self,
        id: &str,
        customer_id: &CustomerId,
    ) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 AND customer_id = $2",
        ))
        .bind(id)
        .bind(customer_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let items =
            serde_json::to_value(&order.items).map_err(|_| RepositoryError::Persistence)?;
        let shipping_address = serde_json::to_value(&order.shipping_address)
            .map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO orders (id, customer_id, items, subtotal, tax, shipping, total,
                status, shipping_address, payment_method, order_date, estimated_delivery)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status"#,
        )
        .bind(&order.id)
        .bind(order.customer_id.as_str())
        .bind(items)
        .bind(&order.subtotal)
        .bind(&order.tax)
        .bind(&order.shipping)
        .bind(&order.total)
        .bind(order.status.to_string())
        .bind(shipping_address)
        .bind(order.payment_method.to_string())
        .bind(order.order_date)
        .bind(order.estimated_delivery)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
