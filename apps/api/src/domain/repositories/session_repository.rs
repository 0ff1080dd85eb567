use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::sessions::TrialSession;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn save(&self, session: &TrialSession) -> RepositoryResult<()>;

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<TrialSession>>;

    /// All sessions ordered by date ascending, undated first
    async fn find_all(&self) -> RepositoryResult<Vec<TrialSession>>;

    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
