use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::convert::{aadhaar_from_db, age_from_db, age_to_db, count_from_db, count_to_db};
use crate::domain::identity::Aadhaar;
use crate::domain::repositories::{
    RegistrationRepository, RepositoryError, RepositoryResult, SessionRepository,
};
use crate::domain::sessions::{Registration, TrialSession};

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    kind: String,
    zone: String,
    ground: String,
    date: Option<DateTime<Utc>>,
    max_players: Option<i32>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<SessionRow> for TrialSession {
    fn from(r: SessionRow) -> Self {
        TrialSession {
            id: r.id,
            kind: r.kind,
            zone: r.zone,
            ground: r.ground,
            date: r.date,
            max_players: count_from_db(r.max_players),
            notes: r.notes,
            created_at: r.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RegistrationRow {
    id: Uuid,
    session_id: Uuid,
    name: String,
    age: i32,
    phone: Option<String>,
    aadhaar: Option<String>,
    approved: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<RegistrationRow> for Registration {
    type Error = RepositoryError;

    fn try_from(r: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(Registration {
            id: r.id,
            session_id: r.session_id,
            name: r.name,
            age: age_from_db("registration", r.age)?,
            phone: r.phone,
            aadhaar: aadhaar_from_db("registration", r.aadhaar)?,
            approved: r.approved,
            created_at: r.created_at,
        })
    }
}

/// PostgreSQL implementation of SessionRepository
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &TrialSession) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, kind, zone, ground, date, max_players, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                kind = EXCLUDED.kind,
                zone = EXCLUDED.zone,
                ground = EXCLUDED.ground,
                date = EXCLUDED.date,
                max_players = EXCLUDED.max_players,
                notes = EXCLUDED.notes
            "#,
        )
        .bind(session.id)
        .bind(&session.kind)
        .bind(&session.zone)
        .bind(&session.ground)
        .bind(session.date)
        .bind(count_to_db(session.max_players))
        .bind(&session.notes)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<TrialSession>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, kind, zone, ground, date, max_players, notes, created_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TrialSession::from))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<TrialSession>> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, kind, zone, ground, date, max_players, notes, created_at
            FROM sessions
            ORDER BY date ASC NULLS FIRST, created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TrialSession::from).collect())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Session", id));
        }

        Ok(())
    }
}

/// PostgreSQL implementation of RegistrationRepository
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn save(&self, registration: &Registration) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO registrations (id, session_id, name, age, phone, aadhaar, approved, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                age = EXCLUDED.age,
                phone = EXCLUDED.phone,
                aadhaar = EXCLUDED.aadhaar,
                approved = EXCLUDED.approved
            "#,
        )
        .bind(registration.id)
        .bind(registration.session_id)
        .bind(&registration.name)
        .bind(age_to_db(registration.age))
        .bind(&registration.phone)
        .bind(registration.aadhaar.as_ref().map(Aadhaar::as_str))
        .bind(registration.approved)
        .bind(registration.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Registration>> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT id, session_id, name, age, phone, aadhaar, approved, created_at
            FROM registrations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Registration::try_from).transpose()
    }

    async fn find_by_session(&self, session_id: Uuid) -> RepositoryResult<Vec<Registration>> {
        let rows = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT id, session_id, name, age, phone, aadhaar, approved, created_at
            FROM registrations
            WHERE session_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Registration::try_from).collect()
    }

    async fn count_by_session(&self, session_id: Uuid) -> RepositoryResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE session_id = $1")
                .bind(session_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count.max(0) as u64)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Registration", id));
        }

        Ok(())
    }
}
