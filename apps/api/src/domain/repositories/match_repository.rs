use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::matches::MatchDocument;

/// Repository for raw match documents
///
/// Documents are stored as written; normalization happens on read.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn insert(&self, doc: &MatchDocument) -> RepositoryResult<()>;

    /// All match documents, oldest first
    async fn find_all(&self) -> RepositoryResult<Vec<MatchDocument>>;
}
