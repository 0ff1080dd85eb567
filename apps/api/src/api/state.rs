use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::domain::repositories::{
    MatchRepository, PlayerRepository, RegistrationRepository, SessionRepository, TeamRepository,
    TrialRepository, UserRepository,
};
use crate::infrastructure::repositories::{
    InMemoryStore, PostgresMatchRepository, PostgresPlayerRepository,
    PostgresRegistrationRepository, PostgresSessionRepository, PostgresTeamRepository,
    PostgresTrialRepository, PostgresUserRepository,
};

/// Shared handler state: configuration plus one handle per repository port
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub players: Arc<dyn PlayerRepository>,
    pub matches: Arc<dyn MatchRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub trials: Arc<dyn TrialRepository>,
}

impl AppState {
    /// State backed by PostgreSQL
    pub fn postgres(pool: PgPool, config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
            players: Arc::new(PostgresPlayerRepository::new(pool.clone())),
            matches: Arc::new(PostgresMatchRepository::new(pool.clone())),
            sessions: Arc::new(PostgresSessionRepository::new(pool.clone())),
            registrations: Arc::new(PostgresRegistrationRepository::new(pool.clone())),
            trials: Arc::new(PostgresTrialRepository::new(pool)),
        }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory(config: AppConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            config: Arc::new(config),
            users: store.clone(),
            teams: store.clone(),
            players: store.clone(),
            matches: store.clone(),
            sessions: store.clone(),
            registrations: store.clone(),
            trials: store,
        }
    }
}
