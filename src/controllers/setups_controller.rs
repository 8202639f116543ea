use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, services::setups_service};

// GET /query_setups
pub async fn get_query_setups(State(state): State<AppState>) -> Response {
    match setups_service::scan_for_matches(&state).await {
        Ok(matches) => Json(json!({ "matches": matches })).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": e })),
        )
            .into_response(),
    }
}
