use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::pickup::model::PickupRequest;
use business::domain::pickup::repository::PickupRequestRepository;
use business::domain::shared::value_objects::IndustryId;

use super::entity::PickupRequestEntity;

pub struct PickupRequestRepositoryPostgres {
    pool: PgPool,
}

impl PickupRequestRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PickupRequestRepository for PickupRequestRepositoryPostgres {
    async fn get_all(
        &self,
        industry_id: &IndustryId,
    ) -> Result<Vec<PickupRequest>, RepositoryError> {
        let entities = sqlx::query_as::<_, PickupRequestEntity>(
            "SELECT id, industry_id, waste_type, amount_kg, status, request_date, notes FROM pickup_requests WHERE industry_id = $1 ORDER BY request_date DESC",
        )
        .bind(industry_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(
        &self,
        id: &str,
        industry_id: &IndustryId,
    ) -> Result<PickupRequest, RepositoryError> {
        let entity = sqlx::query_as::<_, PickupRequestEntity>(
            "SELECT id, industry_id, waste_type, amount_kg, status, request_date, notes FROM pickup_requests WHERE id = $1 AND industry_id = $2",
        )
        .bind(id)
        .bind(industry_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, request: &PickupRequest) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO pickup_requests (id, industry_id, waste_type, amount_kg, status, request_date, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                notes = EXCLUDED.notes"#,
        )
        .bind(&request.id)
        .bind(request.industry_id.as_str())
        .bind(request.waste_type.to_string())
        .bind(request.amount_kg as i32)
        .bind(request.status.to_string())
        .bind(request.request_date)
        .bind(&request.notes)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: &str, industry_id: &IndustryId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM pickup_requests WHERE id = $1 AND industry_id = $2")
            .bind(id)
            .bind(industry_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
