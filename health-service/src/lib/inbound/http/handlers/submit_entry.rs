use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::EntryData;
use crate::domain::entry::errors::EntryError;
use crate::domain::entry::models::HealthEntry;
use crate::domain::entry::models::Mood;
use crate::domain::entry::models::SleepHours;
use crate::domain::entry::models::SubmitEntryCommand;
use crate::domain::entry::models::WaterIntake;
use crate::domain::entry::ports::EntryServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::middleware::AuthContext;
use crate::inbound::http::router::AppState;

pub async fn submit_entry<AS, ES>(
    State(state): State<AppState<AS, ES>>,
    Extension(auth): Extension<AuthContext>,
    body: Result<Json<SubmitEntryRequest>, JsonRejection>,
) -> Result<ApiSuccess<SubmitEntryResponseData>, ApiError>
where
    AS: AuthServicePort,
    ES: EntryServicePort,
{
    let Json(body) = body?;

    state
        .entry_service
        .submit_entry(auth.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref entry| ApiSuccess::new(StatusCode::OK, entry.into()))
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitEntryRequest {
    sleep_hours: Option<f64>,
    water_intake: Option<f64>,
    mood: Option<String>,
}

impl SubmitEntryRequest {
    fn try_into_command(self) -> Result<SubmitEntryCommand, EntryError> {
        let sleep_hours = self
            .sleep_hours
            .ok_or(EntryError::MissingField("sleepHours"))?;
        let water_intake = self
            .water_intake
            .ok_or(EntryError::MissingField("waterIntake"))?;
        let mood = self.mood.ok_or(EntryError::MissingField("mood"))?;

        Ok(SubmitEntryCommand::new(
            SleepHours::new(sleep_hours)?,
            WaterIntake::new(water_intake)?,
            Mood::new(mood)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitEntryResponseData {
    pub message: String,
    pub entry: EntryData,
}

impl From<&HealthEntry> for SubmitEntryResponseData {
    fn from(entry: &HealthEntry) -> Self {
        Self {
            message: "Data received and saved".to_string(),
            entry: entry.into(),
        }
    }
}
