use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use axum::http::{header, HeaderName, Method};
use diesel::r2d2::{self, ConnectionManager};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::path::Path;
use std::sync::Arc;

mod handlers {
    pub mod contact_handlers;
    pub mod notification_handlers;
    pub mod slideshow_handlers;
}
mod api {
    pub mod resend;
}
mod config {
    pub mod notification;
    pub mod server;
}
mod models {
    pub mod landing_models;
}
mod repositories {
    pub mod contact_submissions;
    pub mod errors;
    pub mod slideshow_images;
}
mod schema;
mod utils {
    pub mod contact_email;
    pub mod slideshow_seed;
}
#[cfg(test)]
mod test_support;

use api::resend::{EmailDispatcher, ResendClient};
use config::notification::NotificationConfig;
use config::server::ServerConfig;
use handlers::{contact_handlers, notification_handlers, slideshow_handlers};
use repositories::contact_submissions::ContactSubmissionRepository;
use repositories::slideshow_images::SlideshowImageRepository;

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub slideshow_images: Arc<SlideshowImageRepository>,
    pub contact_submissions: Arc<ContactSubmissionRepository>,
    pub email_dispatcher: Arc<dyn EmailDispatcher>,
}

pub fn validate_env() {
    let _ = std::env::var("RESEND_API_KEY")
        .expect("RESEND_API_KEY must be set");
}

pub fn establish_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder().build(manager)?;
    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    for migration in applied {
        tracing::info!("Applied migration {}", migration);
    }
    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/slideshow-images", get(slideshow_handlers::get_slideshow_images))
        .route("/api/contact-submissions", post(contact_handlers::create_contact_submission))
        .route(
            "/api/functions/send-contact-email",
            post(notification_handlers::send_contact_email)
                .options(notification_handlers::send_contact_email_preflight),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(Any) // the landing page may be served from any host
                .allow_headers([
                    header::AUTHORIZATION,
                    HeaderName::from_static("x-client-info"),
                    HeaderName::from_static("apikey"),
                    header::CONTENT_TYPE,
                ])
                .expose_headers([header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    validate_env();
    let server_config = ServerConfig::from_env();

    let _guard = server_config.sentry_dsn.clone().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let pool = establish_pool(&server_config.database_url)?;
    run_migrations(&pool)?;

    let slideshow_images = Arc::new(SlideshowImageRepository::new(pool.clone()));
    if let Some(seed_file) = &server_config.slideshow_seed_file {
        utils::slideshow_seed::seed_from_file(&slideshow_images, Path::new(seed_file))?;
    }

    let state = Arc::new(AppState {
        slideshow_images,
        contact_submissions: Arc::new(ContactSubmissionRepository::new(pool)),
        email_dispatcher: Arc::new(ResendClient::new(&NotificationConfig::from_env())),
    });

    let listener = tokio::net::TcpListener::bind(&server_config.server_addr).await?;
    tracing::info!("Listening on {}", server_config.server_addr);
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
