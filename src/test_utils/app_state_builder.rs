//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory mocks for testing HTTP endpoints.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::{captcha::turnstile::TurnstileVerifier, http::app_state::AppState},
    application::use_cases::waitlist::{CaptchaVerifier, WaitlistRepo, WaitlistUseCases},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::{config::AppConfig, http_client::build_client_with_timeout},
    test_utils::{InMemoryWaitlistRepo, StaticCaptchaVerifier},
};

/// Nothing listens on the discard port, so requests here fail fast.
const UNREACHABLE_VERIFY_URL: &str = "http://127.0.0.1:9/siteverify";

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let entry = create_test_entry(|e| e.email = "jane@example.com".to_string());
///
/// let (app_state, repo, captcha) = TestAppStateBuilder::new()
///     .with_entry(entry)
///     .build_with_mocks();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    repo: Option<Arc<dyn WaitlistRepo>>,
    captcha: Option<Arc<dyn CaptchaVerifier>>,
    site_key: Option<String>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            repo: None,
            captcha: None,
            site_key: None,
        }
    }

    /// Seed the in-memory repo with an existing entry.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Replace the in-memory repo (e.g. with a failing one).
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Set a custom captcha verifier.
    pub fn with_captcha(mut self, captcha: Arc<dyn CaptchaVerifier>) -> Self {
        self.captcha = Some(captcha);
        self
    }

    /// Use the real Turnstile verifier pointed at an unreachable endpoint.
    pub fn with_turnstile(self, secret: Option<&str>) -> Self {
        let verifier = TurnstileVerifier::new(
            build_client_with_timeout(Duration::from_secs(1)).expect("test HTTP client"),
            secret.map(|s| SecretString::new(s.into())),
            Url::parse(UNREACHABLE_VERIFY_URL).unwrap(),
        );
        self.with_captcha(Arc::new(verifier))
    }

    pub fn with_site_key(mut self, site_key: &str) -> Self {
        self.site_key = Some(site_key.to_string());
        self
    }

    /// Create app state with an in-memory repo and a recording captcha verifier.
    /// The returned verifier is only wired in when no other one was set.
    pub fn build_with_mocks(
        mut self,
    ) -> (
        AppState,
        Arc<InMemoryWaitlistRepo>,
        Arc<StaticCaptchaVerifier>,
    ) {
        let repo = Arc::new(InMemoryWaitlistRepo::with_entries(std::mem::take(
            &mut self.entries,
        )));
        let captcha = Arc::new(StaticCaptchaVerifier::accepting());

        if self.captcha.is_none() {
            self.captcha = Some(captcha.clone());
        }
        let app_state = self.with_repo(repo.clone()).build();

        (app_state, repo, captcha)
    }

    /// Build the AppState with all configured mocks.
    pub fn build(self) -> AppState {
        let repo: Arc<dyn WaitlistRepo> = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryWaitlistRepo::with_entries(self.entries)));
        let captcha: Arc<dyn CaptchaVerifier> = self
            .captcha
            .unwrap_or_else(|| Arc::new(StaticCaptchaVerifier::accepting()));

        let waitlist_use_cases = Arc::new(WaitlistUseCases::new(repo, captcha));

        // Create minimal config for testing
        let config = Arc::new(AppConfig {
            bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
            database_url: String::new(),
            database_max_connections: 1,
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            turnstile_secret_key: None,
            turnstile_site_key: self.site_key,
            turnstile_verify_url: Url::parse(UNREACHABLE_VERIFY_URL).unwrap(),
            captcha_timeout: Duration::from_secs(1),
            log_file: String::new(),
        });

        AppState {
            config,
            waitlist_use_cases,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
