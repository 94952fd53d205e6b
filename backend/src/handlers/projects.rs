use axum::{extract::State, Json};

use crate::{models::Project, state::AppState};

pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.store.projects().to_vec())
}
