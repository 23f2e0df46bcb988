use std::env;

pub const EMAIL_SENDER: &str = "HyperArch <noreply@hyperarch.com>";
pub const EMAIL_RECIPIENTS: [&str; 2] = ["cqizhi@u.nus.edu", "joelleo@comp.nus.edu.sg"];
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Clone, Debug)]
pub struct NotificationConfig {
    pub api_key: String,
    pub api_url: String,
}

impl NotificationConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("RESEND_API_KEY").unwrap_or_default(), // checked in validate_env
            api_url: env::var("RESEND_API_URL").unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string()),
        }
    }
}
