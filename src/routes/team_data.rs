use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::{
    app_state::AppState,
    domain::{DisplayMember, FetchError},
};

/// The props the team page is currently rendered from.
#[tracing::instrument(name = "Team data route handler", skip_all)]
pub async fn team_data(
    State(state): State<AppState>,
) -> (StatusCode, Json<TeamDataResponse>) {
    let response = match state.team_page.props().await {
        None => TeamDataResponse {
            members: None,
            error: None,
        },
        Some(Ok(members)) => TeamDataResponse {
            members: Some(members),
            error: None,
        },
        Some(Err(error)) => TeamDataResponse {
            members: None,
            error: Some(error),
        },
    };

    (StatusCode::OK, Json(response))
}

#[derive(Debug, PartialEq, Serialize)]
pub struct TeamDataResponse {
    pub members: Option<Vec<DisplayMember>>,
    pub error: Option<FetchError>,
}
