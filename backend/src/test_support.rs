use std::sync::Arc;

use axum::{body::Body, http::Response, Router};
use diesel::r2d2::{self, ConnectionManager};
use diesel::SqliteConnection;
use http_body_util::BodyExt;

use crate::api::resend::MockEmailDispatcher;
use crate::repositories::{
    contact_submissions::ContactSubmissionRepository, slideshow_images::SlideshowImageRepository,
};
use crate::{app, run_migrations, AppState, DbPool};

// Single connection so every checkout sees the same in-memory database
pub fn memory_pool() -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .expect("in-memory pool");
    run_migrations(&pool).expect("migrations");
    pool
}

pub fn test_state(dispatcher: MockEmailDispatcher) -> Arc<AppState> {
    let pool = memory_pool();
    Arc::new(AppState {
        slideshow_images: Arc::new(SlideshowImageRepository::new(pool.clone())),
        contact_submissions: Arc::new(ContactSubmissionRepository::new(pool)),
        email_dispatcher: Arc::new(dispatcher),
    })
}

pub fn test_app(state: Arc<AppState>) -> Router {
    app(state)
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}
