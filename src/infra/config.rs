use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default, get_env_opt};
use secrecy::SecretString;
use url::Url;

/// Cloudflare Turnstile verification endpoint.
pub const DEFAULT_TURNSTILE_VERIFY_URL: &str =
    "https://challenges.cloudflare.com/turnstile/v0/siteverify";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub database_max_connections: u32,
    pub cors_origin: HeaderValue,
    /// Turnstile secret. When absent, bot verification is skipped and every
    /// token is accepted.
    pub turnstile_secret_key: Option<SecretString>,
    /// Public site key handed to the challenge widget.
    pub turnstile_site_key: Option<String>,
    pub turnstile_verify_url: Url,
    /// Total time allowed for one verification round trip.
    pub captcha_timeout: Duration,
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let database_url: String = get_env("DATABASE_URL");
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        // An empty value counts as unset.
        let turnstile_secret_key: Option<SecretString> = optional_env("TURNSTILE_SECRET_KEY")
            .map(|s| SecretString::new(s.into()));
        let turnstile_site_key: Option<String> = optional_env("TURNSTILE_SITE_KEY");
        let turnstile_verify_url: Url = get_env_default(
            "TURNSTILE_VERIFY_URL",
            Url::parse(DEFAULT_TURNSTILE_VERIFY_URL).unwrap(),
        );
        let captcha_timeout_secs: u64 = get_env_default("CAPTCHA_TIMEOUT_SECS", 10);
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            bind_addr,
            database_url,
            database_max_connections,
            cors_origin,
            turnstile_secret_key,
            turnstile_site_key,
            turnstile_verify_url,
            captcha_timeout: Duration::from_secs(captcha_timeout_secs),
            log_file,
        }
    }
}

fn optional_env(key: &'static str) -> Option<String> {
    get_env_opt(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
