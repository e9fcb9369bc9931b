use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::state::AppState;

/// Always 200: a failed lookup degrades to the placeholder card.
pub async fn handle(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    Json(state.profile_handler.card(&user_id).await).into_response()
}
