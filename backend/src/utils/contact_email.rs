use chrono::{DateTime, Utc};
use maud::html;
use serde::Deserialize;

use crate::api::resend::OutgoingEmail;
use crate::config::notification::{EMAIL_RECIPIENTS, EMAIL_SENDER};

/// Body accepted by the notification function. Missing fields render empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactEmailRequest {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_solution: String,
    pub pain_points: Option<Vec<String>>,
    pub note: Option<String>,
}

pub fn compose_contact_email(request: &ContactEmailRequest, submitted_at: DateTime<Utc>) -> OutgoingEmail {
    OutgoingEmail {
        from: EMAIL_SENDER.to_string(),
        to: EMAIL_RECIPIENTS.iter().map(|r| r.to_string()).collect(),
        subject: format!("New HyperArch Contact: {} from {}", request.name, request.company),
        html: render_html(request, submitted_at),
    }
}

fn pain_points_summary(pain_points: Option<&[String]>) -> String {
    match pain_points {
        Some(points) if !points.is_empty() => points.join(", "),
        _ => "None selected".to_string(),
    }
}

fn render_html(request: &ContactEmailRequest, submitted_at: DateTime<Utc>) -> String {
    let phone = request
        .phone
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or("Not provided");
    let note = request.note.as_deref().filter(|n| !n.is_empty());
    let submission_time = submitted_at.format("%-m/%-d/%Y, %-I:%M:%S %p UTC").to_string();

    html! {
        h2 { "New Contact Form Submission - HyperArch" }
        p { strong { "Submission Time:" } " " (submission_time) }

        h3 { "Contact Information:" }
        ul {
            li { strong { "Name:" } " " (request.name) }
            li { strong { "Company/Organisation:" } " " (request.company) }
            li { strong { "Email:" } " " (request.email) }
            li { strong { "Phone:" } " " (phone) }
        }

        h3 { "Preferences:" }
        ul {
            li { strong { "Preferred Solution:" } " " (request.preferred_solution) }
            li { strong { "Pain Points Selected:" } " " (pain_points_summary(request.pain_points.as_deref())) }
        }

        @if let Some(note) = note {
            h3 { "Additional Notes:" }
            p { (note) }
        }

        hr;
        p { em { "This email was automatically generated from the HyperArch landing page contact form." } }
    }
    .into_string()
}
