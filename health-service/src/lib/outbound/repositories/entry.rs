use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::entry::errors::EntryError;
use crate::domain::entry::models::EntryId;
use crate::domain::entry::models::HealthEntry;
use crate::domain::entry::models::Mood;
use crate::domain::entry::models::SleepHours;
use crate::domain::entry::models::WaterIntake;
use crate::domain::entry::ports::EntryRepository;
use crate::domain::user::models::UserId;

pub struct PostgresEntryRepository {
    pool: PgPool,
}

impl PostgresEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: PgRow) -> Result<HealthEntry, EntryError> {
        Ok(HealthEntry {
            id: EntryId(row.get("id")),
            owner: UserId(row.get("user_id")),
            sleep_hours: SleepHours::new(row.get("sleep_hours"))?,
            water_intake: WaterIntake::new(row.get("water_intake"))?,
            mood: Mood::new(row.get("mood"))?,
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl EntryRepository for PostgresEntryRepository {
    async fn create(&self, entry: HealthEntry) -> Result<HealthEntry, EntryError> {
        sqlx::query(
            r#"
            INSERT INTO health_entries (id, user_id, sleep_hours, water_intake, mood, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id.0)
        .bind(entry.owner.0)
        .bind(entry.sleep_hours.value())
        .bind(entry.water_intake.value())
        .bind(entry.mood.as_str())
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| EntryError::DatabaseError(e.to_string()))?;

        Ok(entry)
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<HealthEntry>, EntryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, sleep_hours, water_intake, mood, created_at
            FROM health_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| EntryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_entry).collect()
    }
}
