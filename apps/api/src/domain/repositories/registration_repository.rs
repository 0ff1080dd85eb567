use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::sessions::Registration;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn save(&self, registration: &Registration) -> RepositoryResult<()>;

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Registration>>;

    /// Registrations for a session, oldest first
    async fn find_by_session(&self, session_id: Uuid) -> RepositoryResult<Vec<Registration>>;

    async fn count_by_session(&self, session_id: Uuid) -> RepositoryResult<u64>;

    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
