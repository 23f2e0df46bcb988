use std::fmt;
use std::str::FromStr;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{contact_submissions, slideshow_images};

/// Content grouping shared by slideshow images and the showcase tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Compliance,
    Documentation,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Compliance => "compliance",
            Category::Documentation => "documentation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compliance" => Ok(Category::Compliance),
            "documentation" => Ok(Category::Documentation),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = slideshow_images)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SlideshowImage {
    pub image_url: String, // empty when only the alt text should be shown
    pub alt_text: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = slideshow_images)]
pub struct NewSlideshowImage {
    pub category: String,
    pub image_url: String,
    pub alt_text: String,
    pub order_index: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = contact_submissions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactSubmission {
    pub id: i32,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_solution: String,
    pub pain_points: String, // JSON array of labels
    pub note: Option<String>,
    pub created_at: String, // ISO 8601
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = contact_submissions)]
pub struct NewContactSubmission {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_solution: String,
    pub pain_points: String,
    pub note: Option<String>,
    pub created_at: String,
}
