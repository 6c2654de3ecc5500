use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::schools::models::School;

/// Persistent storage for school records
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// All schools; callers must not rely on the order
    async fn list_all(&self) -> Result<Vec<School>>;

    /// Persist a fully geocoded school
    async fn insert(&self, school: &School) -> Result<()>;
}

/// PostgreSQL-backed repository over the `schools` table
pub struct PgSchoolRepository {
    pool: PgPool,
}

impl PgSchoolRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolRepository for PgSchoolRepository {
    async fn list_all(&self) -> Result<Vec<School>> {
        sqlx::query_as::<_, School>(
            r#"
            SELECT id, name, address, latitude, longitude
            FROM schools
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list schools: {:?}", e);
            AppError::Storage(e)
        })
    }

    async fn insert(&self, school: &School) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO schools (id, name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(school.id)
        .bind(&school.name)
        .bind(&school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert school {}: {:?}", school.id, e);
            AppError::Storage(e)
        })?;

        Ok(())
    }
}
