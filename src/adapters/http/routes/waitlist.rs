use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use waitlist_types::{JoinWaitlistRequest, WidgetConfig};

use crate::{
    adapters::http::{app_state::AppState, client_ip::ClientIp},
    app_error::{AppError, AppResult},
    use_cases::waitlist::JoinWaitlistInput,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlist", post(join_waitlist))
        .route("/waitlist/config", get(widget_config))
}

/// POST /api/waitlist
/// Adds the caller to the waitlist and returns the stored entry with 201.
async fn join_waitlist(
    State(app_state): State<AppState>,
    ClientIp(remote_ip): ClientIp,
    payload: Result<Json<JoinWaitlistRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let entry = app_state
        .waitlist_use_cases
        .join(JoinWaitlistInput {
            full_name: payload.full_name,
            email: payload.email,
            token: payload.token,
            remote_ip,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/waitlist/config
/// Public settings for the challenge widget.
async fn widget_config(State(app_state): State<AppState>) -> Json<WidgetConfig> {
    Json(WidgetConfig {
        site_key: app_state.config.turnstile_site_key.clone(),
    })
}
