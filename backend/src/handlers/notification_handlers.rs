use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::json;

use crate::api::resend::NotificationError;
use crate::utils::contact_email::{compose_contact_email, ContactEmailRequest};
use crate::AppState;

// Pre-flight: CORS headers come from the router layer
pub async fn send_contact_email_preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn send_contact_email(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match relay_contact_email(&state, &body).await {
        Ok(()) => Ok(Json(json!({"success": true, "message": "Email sent successfully"}))),
        Err(e) => {
            tracing::error!("Error sending email: {}", e);
            Err((StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()}))))
        }
    }
}

async fn relay_contact_email(state: &AppState, body: &[u8]) -> Result<(), NotificationError> {
    let request: ContactEmailRequest = serde_json::from_slice(body)?;
    let email = compose_contact_email(&request, Utc::now());
    state.email_dispatcher.send(&email).await?;
    tracing::info!("Contact email sent for {} from {}", request.name, request.company);
    Ok(())
}
