use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::industry::model::IndustryUser;
use business::domain::industry::repository::IndustryRepository;
use business::domain::shared::value_objects::IndustryId;

use super::entity::IndustryEntity;

pub struct IndustryRepositoryPostgres {
    pool: PgPool,
}

impl IndustryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IndustryRepository for IndustryRepositoryPostgres {
    async fn get_by_id(&self, id: &IndustryId) -> Result<IndustryUser, RepositoryError> {
        let entity = sqlx::query_as::<_, IndustryEntity>(
            "SELECT id, industry_name, contact_person, email, phone, waste_types, address, latitude, longitude, description, password_digest, registered_at FROM industries WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, industry: &IndustryUser) -> Result<(), RepositoryError> {
        let waste_types = serde_json::to_value(&industry.waste_types)
            .map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO industries (id, industry_name, contact_person, email, phone, waste_types, address, latitude, longitude, description, password_digest, registered_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                industry_name = EXCLUDED.industry_name,
                contact_person = EXCLUDED.contact_person,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                waste_types = EXCLUDED.waste_types,
                address = EXCLUDED.address,
                description = EXCLUDED.description"#,
        )
        .bind(industry.id.as_str())
        .bind(&industry.industry_name)
        .bind(&industry.contact_person)
        .bind(&industry.email)
        .bind(&industry.phone)
        .bind(waste_types)
        .bind(&industry.address)
        .bind(industry.latitude)
        .bind(industry.longitude)
        .bind(&industry.description)
        .bind(industry.password_digest.as_str())
        .bind(industry.registered_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
