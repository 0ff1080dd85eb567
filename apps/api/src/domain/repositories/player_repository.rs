use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::player::Player;

/// Repository trait for Player aggregate
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Save a player (insert or update)
    async fn save(&self, player: &Player) -> RepositoryResult<()>;

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Player>>;

    /// All players, newest first
    async fn find_all(&self) -> RepositoryResult<Vec<Player>>;

    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Player>>;

    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;

    async fn count(&self) -> RepositoryResult<u64>;
}
