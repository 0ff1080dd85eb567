use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::trial::TrialSignup;

#[async_trait]
pub trait TrialRepository: Send + Sync {
    async fn save(&self, trial: &TrialSignup) -> RepositoryResult<()>;

    /// All trial sign-ups, newest first
    async fn find_all(&self) -> RepositoryResult<Vec<TrialSignup>>;

    async fn count(&self) -> RepositoryResult<u64>;
}
