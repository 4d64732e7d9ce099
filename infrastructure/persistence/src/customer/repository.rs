use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::customer::model::Customer;
use business::domain::customer::repository::CustomerRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::CustomerId;

use super::entity::CustomerEntity;

pub struct CustomerRepositoryPostgres {
    pool: PgPool,
}

impl CustomerRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryPostgres {
    async fn get_by_id(&self, id: &CustomerId) -> Result<Customer, RepositoryError> {
        let entity = sqlx::query_as::<_, CustomerEntity>(
            "SELECT id, name, email, phone, address, city, zip_code, latitude, longitude, password_digest, registered_at FROM customers WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO customers (id, name, email, phone, address, city, zip_code, latitude, longitude, password_digest, registered_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                address = EXCLUDED.address,
                city = EXCLUDED.city,
                zip_code = EXCLUDED.zip_code"#,
        )
        .bind(customer.id.as_str())
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.zip_code)
        .bind(customer.latitude)
        .bind(customer.longitude)
        .bind(customer.password_digest.as_str())
        .bind(customer.registered_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
