use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::landing_models::{ContactSubmission, NewContactSubmission};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateContactSubmissionRequest {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_solution: String,
    #[serde(default)]
    pub pain_points: Vec<String>,
    pub note: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmissionResponse {
    pub id: i32,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_solution: String,
    pub pain_points: Vec<String>,
    pub note: Option<String>,
    pub created_at: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl CreateContactSubmissionRequest {
    fn into_new_submission(self) -> Result<NewContactSubmission, serde_json::Error> {
        Ok(NewContactSubmission {
            name: self.name,
            company: self.company,
            email: self.email,
            phone: non_empty(self.phone),
            preferred_solution: self.preferred_solution,
            pain_points: serde_json::to_string(&self.pain_points)?,
            note: non_empty(self.note),
            created_at: non_empty(self.created_at)
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        })
    }
}

impl TryFrom<ContactSubmission> for ContactSubmissionResponse {
    type Error = serde_json::Error;

    fn try_from(row: ContactSubmission) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            company: row.company,
            email: row.email,
            phone: row.phone,
            preferred_solution: row.preferred_solution,
            pain_points: serde_json::from_str(&row.pain_points)?,
            note: row.note,
            created_at: row.created_at,
        })
    }
}

fn internal_error(e: impl std::fmt::Display) -> (StatusCode, Json<serde_json::Value>) {
    tracing::error!("Failed to store contact submission: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Failed to store contact submission"})),
    )
}

pub async fn create_contact_submission(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<ContactSubmissionResponse>), (StatusCode, Json<serde_json::Value>)> {
    let request: CreateContactSubmissionRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected contact submission body: {}", e);
        (StatusCode::BAD_REQUEST, Json(json!({"error": format!("Invalid submission: {}", e)})))
    })?;

    let new_submission = request.into_new_submission().map_err(internal_error)?;
    let stored = state
        .contact_submissions
        .insert(new_submission)
        .map_err(internal_error)?;

    tracing::info!("Stored contact submission {} from {}", stored.id, stored.company);
    let response = ContactSubmissionResponse::try_from(stored).map_err(internal_error)?;
    Ok((StatusCode::CREATED, Json(response)))
}
