use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entry::errors::EntryError;
use crate::domain::entry::models::HealthEntry;
use crate::domain::entry::ports::EntryRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local credential store keyed by normalized email.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        // Check and insert under one write lock so concurrent signups settle here.
        let mut users = self.users.write().await;

        if users.contains_key(user.email.as_str()) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        users.insert(user.email.as_str().to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(email.as_str()).cloned())
    }
}

/// Process-local entry store, append-only.
#[derive(Default)]
pub struct InMemoryEntryRepository {
    entries: RwLock<Vec<HealthEntry>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn create(&self, entry: HealthEntry) -> Result<HealthEntry, EntryError> {
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<HealthEntry>, EntryError> {
        // Latest insert wins ties on created_at.
        let mut entries: Vec<HealthEntry> = self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .filter(|entry| entry.owner == *owner)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}
