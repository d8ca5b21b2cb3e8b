use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::EntryError;
use super::models::EntryId;
use super::models::HealthEntry;
use super::models::SubmitEntryCommand;
use super::ports::EntryRepository;
use super::ports::EntryServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of EntryServicePort.
///
/// Generic over repository for testability.
pub struct EntryService<ER>
where
    ER: EntryRepository,
{
    entry_repository: Arc<ER>,
}

impl<ER> EntryService<ER>
where
    ER: EntryRepository,
{
    pub fn new(entry_repository: Arc<ER>) -> Self {
        Self { entry_repository }
    }
}

#[async_trait]
impl<ER> EntryServicePort for EntryService<ER>
where
    ER: EntryRepository,
{
    async fn submit_entry(
        &self,
        owner: UserId,
        command: SubmitEntryCommand,
    ) -> Result<HealthEntry, EntryError> {
        let entry = HealthEntry {
            id: EntryId::new(),
            owner,
            sleep_hours: command.sleep_hours,
            water_intake: command.water_intake,
            mood: command.mood,
            created_at: Utc::now(),
        };

        let saved = self.entry_repository.create(entry).await?;
        tracing::info!(entry_id = %saved.id, user_id = %saved.owner, "Health entry saved");

        Ok(saved)
    }

    async fn list_entries(&self, owner: &UserId) -> Result<Vec<HealthEntry>, EntryError> {
        self.entry_repository.find_by_owner(owner).await
    }
}
