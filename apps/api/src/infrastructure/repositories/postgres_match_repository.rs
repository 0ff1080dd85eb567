use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::matches::MatchDocument;
use crate::domain::repositories::{MatchRepository, RepositoryResult};

#[derive(sqlx::FromRow)]
struct MatchRow {
    id: Uuid,
    body: Json<serde_json::Value>,
    created_at: DateTime<Utc>,
}

/// PostgreSQL implementation of MatchRepository; bodies live in a JSONB column
pub struct PostgresMatchRepository {
    pool: PgPool,
}

impl PostgresMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchRepository for PostgresMatchRepository {
    async fn insert(&self, doc: &MatchDocument) -> RepositoryResult<()> {
        sqlx::query("INSERT INTO matches (id, body, created_at) VALUES ($1, $2, $3)")
            .bind(doc.id)
            .bind(Json(&doc.body))
            .bind(doc.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<MatchDocument>> {
        let rows = sqlx::query_as::<_, MatchRow>(
            "SELECT id, body, created_at FROM matches ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| MatchDocument {
                id: r.id,
                body: r.body.0,
                created_at: r.created_at,
            })
            .collect())
    }
}
