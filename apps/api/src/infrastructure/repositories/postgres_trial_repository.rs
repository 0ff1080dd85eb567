use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::convert::{age_from_db, age_to_db};
use crate::domain::identity::Aadhaar;
use crate::domain::repositories::{RepositoryError, RepositoryResult, TrialRepository};
use crate::domain::trial::TrialSignup;

#[derive(sqlx::FromRow)]
struct TrialRow {
    id: Uuid,
    name: String,
    aadhaar: String,
    age: i32,
    zone: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TrialRow> for TrialSignup {
    type Error = RepositoryError;

    fn try_from(r: TrialRow) -> Result<Self, Self::Error> {
        let aadhaar = Aadhaar::parse(&r.aadhaar).map_err(|e| RepositoryError::Corrupt {
            entity: "trial",
            reason: e.to_string(),
        })?;

        Ok(TrialSignup {
            id: r.id,
            name: r.name,
            aadhaar,
            age: age_from_db("trial", r.age)?,
            zone: r.zone,
            role: r.role,
            created_at: r.created_at,
        })
    }
}

/// PostgreSQL implementation of TrialRepository
pub struct PostgresTrialRepository {
    pool: PgPool,
}

impl PostgresTrialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrialRepository for PostgresTrialRepository {
    async fn save(&self, trial: &TrialSignup) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO trials (id, name, aadhaar, age, zone, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(trial.id)
        .bind(&trial.name)
        .bind(trial.aadhaar.as_str())
        .bind(age_to_db(trial.age))
        .bind(&trial.zone)
        .bind(&trial.role)
        .bind(trial.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<TrialSignup>> {
        let rows = sqlx::query_as::<_, TrialRow>(
            r#"
            SELECT id, name, aadhaar, age, zone, role, created_at
            FROM trials
            ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TrialSignup::try_from).collect()
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trials")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}
