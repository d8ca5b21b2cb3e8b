use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::EntryData;
use crate::domain::entry::ports::EntryServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::middleware::AuthContext;
use crate::inbound::http::router::AppState;

pub async fn list_entries<AS, ES>(
    State(state): State<AppState<AS, ES>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<ApiSuccess<Vec<EntryData>>, ApiError>
where
    AS: AuthServicePort,
    ES: EntryServicePort,
{
    state
        .entry_service
        .list_entries(&auth.user_id)
        .await
        .map_err(ApiError::from)
        .map(|entries| {
            ApiSuccess::new(StatusCode::OK, entries.iter().map(EntryData::from).collect())
        })
}
