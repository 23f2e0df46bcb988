use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub server_addr: String,
    pub sentry_dsn: Option<String>,
    pub slideshow_seed_file: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "database.db".to_string()),
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string()),
            sentry_dsn: env::var("SENTRY_DSN").ok().filter(|dsn| !dsn.is_empty()),
            slideshow_seed_file: env::var("SLIDESHOW_SEED_FILE").ok().filter(|p| !p.is_empty()),
        }
    }
}
