use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::team::{SeasonTotals, Team};

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    async fn save(&self, team: &Team) -> RepositoryResult<()>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>>;

    /// All teams, oldest first
    async fn find_all(&self) -> RepositoryResult<Vec<Team>>;

    /// Replace a team's season totals; fails with NotFound for unknown ids
    async fn update_season(&self, id: Uuid, totals: SeasonTotals) -> RepositoryResult<Team>;

    /// Delete a team by ID
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;

    /// Number of teams
    async fn count(&self) -> RepositoryResult<u64>;
}
