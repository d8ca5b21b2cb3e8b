use async_trait::async_trait;

use crate::domain::entry::errors::EntryError;
use crate::domain::entry::models::HealthEntry;
use crate::domain::entry::models::SubmitEntryCommand;
use crate::domain::user::models::UserId;

/// Port for health entry operations on behalf of an authorized user.
#[async_trait]
pub trait EntryServicePort: Send + Sync + 'static {
    /// Record a new entry owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn submit_entry(
        &self,
        owner: UserId,
        command: SubmitEntryCommand,
    ) -> Result<HealthEntry, EntryError>;

    /// List the entries owned by `owner`, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_entries(&self, owner: &UserId) -> Result<Vec<HealthEntry>, EntryError>;
}

/// Persistence operations for health entries.
#[async_trait]
pub trait EntryRepository: Send + Sync + 'static {
    async fn create(&self, entry: HealthEntry) -> Result<HealthEntry, EntryError>;

    /// Entries owned by `owner`, ordered by `created_at` descending.
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<HealthEntry>, EntryError>;
}
