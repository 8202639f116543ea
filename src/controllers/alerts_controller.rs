use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, services::alerts_service};

#[derive(Debug, Deserialize)]
pub struct SubmitAlertRequest {
    pub email: String,
    pub ticker: String,
    pub rsi_min: f64,
    pub rsi_max: f64,
    pub macd_min: f64,
    pub macd_max: f64,
}

fn detail(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(json!({ "detail": msg.into() }))).into_response()
}

// POST /submit_alert
pub async fn post_submit_alert(
    State(state): State<AppState>,
    Json(req): Json<SubmitAlertRequest>,
) -> Response {
    let email = req.email.trim();
    let ticker = req.ticker.trim();

    if email.is_empty() {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "email is required");
    }
    if ticker.is_empty() {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "ticker is required");
    }

    if let Err(e) = alerts_service::submit_alert(
        &state,
        email,
        ticker,
        req.rsi_min,
        req.rsi_max,
        req.macd_min,
        req.macd_max,
    )
    .await
    {
        return detail(StatusCode::INTERNAL_SERVER_ERROR, e);
    }

    Json(json!({
        "status": "alert saved",
        "email": email,
        "ticker": ticker.to_uppercase(),
    }))
    .into_response()
}
