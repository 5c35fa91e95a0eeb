//! Category store port

use super::store_error::StoreError;
use async_trait::async_trait;
use trivia_domain::{Category, CategoryId};

/// Read-only collection of categories
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Every category, ordered by label
    async fn list_all(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;
}
