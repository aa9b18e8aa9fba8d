//! Axum route handler for the initiation form.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::signup::{submit_join, JoinForm};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JoinResponse {
    pub status: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

/// POST /api/v1/join
///
/// Validates the form, then performs both deliveries. Success is terminal
/// for the submitting page; failure maps to 502 with retry guidance and the
/// client keeps its entered values.
pub async fn handle_join(
    State(state): State<AppState>,
    Json(form): Json<JoinForm>,
) -> Result<(StatusCode, Json<JoinResponse>), AppError> {
    form.validate().map_err(AppError::Validation)?;

    submit_join(state.mailer.as_ref(), &state.config, &form).await?;

    info!("Initiation submission accepted (path: {})", form.path);

    Ok((
        StatusCode::CREATED,
        Json(JoinResponse {
            status: "received",
            title: "Transmission Received",
            message: "The first Trial has been sent to your inbox. Do not fail.",
        }),
    ))
}
