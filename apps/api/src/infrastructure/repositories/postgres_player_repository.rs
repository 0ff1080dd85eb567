use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::convert::{aadhaar_from_db, age_from_db, age_to_db};
use crate::domain::identity::Aadhaar;
use crate::domain::player::Player;
use crate::domain::repositories::{PlayerRepository, RepositoryError, RepositoryResult};

const PLAYER_COLUMNS: &str =
    "id, team_id, name, age, aadhaar, phone, preferred_role, checked_in, checked_in_at, created_at";

#[derive(sqlx::FromRow)]
struct PlayerRow {
    id: Uuid,
    team_id: Option<Uuid>,
    name: String,
    age: i32,
    aadhaar: Option<String>,
    phone: Option<String>,
    preferred_role: Option<String>,
    checked_in: bool,
    checked_in_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PlayerRow> for Player {
    type Error = RepositoryError;

    fn try_from(r: PlayerRow) -> Result<Self, Self::Error> {
        Ok(Player::from_persistence(
            r.id,
            r.team_id,
            r.name,
            age_from_db("player", r.age)?,
            aadhaar_from_db("player", r.aadhaar)?,
            r.phone,
            r.preferred_role,
            r.checked_in,
            r.checked_in_at,
            r.created_at,
        ))
    }
}

/// PostgreSQL implementation of PlayerRepository
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn save(&self, player: &Player) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO players (
                id, team_id, name, age, aadhaar, phone, preferred_role,
                checked_in, checked_in_at, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                team_id = EXCLUDED.team_id,
                name = EXCLUDED.name,
                age = EXCLUDED.age,
                aadhaar = EXCLUDED.aadhaar,
                phone = EXCLUDED.phone,
                preferred_role = EXCLUDED.preferred_role,
                checked_in = EXCLUDED.checked_in,
                checked_in_at = EXCLUDED.checked_in_at
            "#,
        )
        .bind(player.id())
        .bind(player.team_id())
        .bind(player.name())
        .bind(age_to_db(player.age()))
        .bind(player.aadhaar().map(Aadhaar::as_str))
        .bind(player.phone())
        .bind(player.preferred_role())
        .bind(player.checked_in())
        .bind(player.checked_in_at())
        .bind(player.created_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Player>> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {} FROM players WHERE id = $1",
            PLAYER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Player::try_from).transpose()
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {} FROM players ORDER BY created_at DESC, id",
            PLAYER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Player::try_from).collect()
    }

    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {} FROM players WHERE team_id = $1 ORDER BY created_at, id",
            PLAYER_COLUMNS
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Player::try_from).collect()
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Player", id));
        }

        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}
