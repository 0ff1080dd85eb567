use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::convert::{count_from_db, count_to_db};
use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::{SeasonTotals, Team};
use crate::domain::user::Email;

const TEAM_COLUMNS: &str = "id, name, zone, contact_email, played, won, lost, drawn, points, nrr, created_at";

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    zone: Option<String>,
    contact_email: Option<String>,
    played: Option<i32>,
    won: Option<i32>,
    lost: Option<i32>,
    drawn: Option<i32>,
    points: Option<i32>,
    nrr: Option<Decimal>,
    created_at: DateTime<Utc>,
}

impl TryFrom<TeamRow> for Team {
    type Error = RepositoryError;

    fn try_from(r: TeamRow) -> Result<Self, Self::Error> {
        let contact_email = r
            .contact_email
            .filter(|e| !e.trim().is_empty())
            .map(Email::new)
            .transpose()
            .map_err(|e| RepositoryError::Corrupt {
                entity: "team",
                reason: e.to_string(),
            })?;

        Ok(Team::from_persistence(
            r.id,
            r.name,
            r.zone,
            contact_email,
            SeasonTotals {
                played: count_from_db(r.played),
                won: count_from_db(r.won),
                lost: count_from_db(r.lost),
                drawn: count_from_db(r.drawn),
                points: count_from_db(r.points),
                nrr: r.nrr,
            },
            r.created_at,
        ))
    }
}

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> RepositoryResult<()> {
        let season = team.season();
        sqlx::query(
            r#"
            INSERT INTO teams (
                id, name, zone, contact_email,
                played, won, lost, drawn, points, nrr, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                zone = EXCLUDED.zone,
                contact_email = EXCLUDED.contact_email,
                played = EXCLUDED.played,
                won = EXCLUDED.won,
                lost = EXCLUDED.lost,
                drawn = EXCLUDED.drawn,
                points = EXCLUDED.points,
                nrr = EXCLUDED.nrr
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.zone())
        .bind(team.contact_email().map(Email::as_str))
        .bind(count_to_db(season.played))
        .bind(count_to_db(season.won))
        .bind(count_to_db(season.lost))
        .bind(count_to_db(season.drawn))
        .bind(count_to_db(season.points))
        .bind(season.nrr)
        .bind(team.created_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(&format!(
            "SELECT {} FROM teams WHERE id = $1",
            TEAM_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Team::try_from).transpose()
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(&format!(
            "SELECT {} FROM teams ORDER BY created_at, id",
            TEAM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Team::try_from).collect()
    }

    async fn update_season(&self, id: Uuid, totals: SeasonTotals) -> RepositoryResult<Team> {
        let row = sqlx::query_as::<_, TeamRow>(&format!(
            r#"
            UPDATE teams
            SET played = $2, won = $3, lost = $4, drawn = $5, points = $6, nrr = $7
            WHERE id = $1
            RETURNING {}
            "#,
            TEAM_COLUMNS
        ))
        .bind(id)
        .bind(count_to_db(totals.played))
        .bind(count_to_db(totals.won))
        .bind(count_to_db(totals.lost))
        .bind(count_to_db(totals.drawn))
        .bind(count_to_db(totals.points))
        .bind(totals.nrr)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Team", id))?;

        Team::try_from(row)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Team", id));
        }

        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}
