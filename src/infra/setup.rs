use crate::{
    adapters::{captcha::turnstile::TurnstileVerifier, http::app_state::AppState},
    infra::{InfraError, config::AppConfig, http_client, postgres_persistence},
    use_cases::waitlist::{CaptchaVerifier, WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let postgres_arc = Arc::new(
        postgres_persistence(&config.database_url, config.database_max_connections).await?,
    );

    if config.turnstile_secret_key.is_none() {
        tracing::warn!(
            "TURNSTILE_SECRET_KEY is not set: bot verification is DISABLED and every token will be accepted"
        );
    }

    let captcha_client =
        http_client::build_client_with_timeout(config.captcha_timeout).map_err(InfraError::HttpClient)?;
    let captcha = Arc::new(TurnstileVerifier::new(
        captcha_client,
        config.turnstile_secret_key.clone(),
        config.turnstile_verify_url.clone(),
    ));

    let waitlist_use_cases = WaitlistUseCases::new(
        postgres_arc as Arc<dyn WaitlistRepo>,
        captcha as Arc<dyn CaptchaVerifier>,
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing(log_file: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), skipped if the file cannot be created
    let json_layer = match File::create(log_file) {
        Ok(file) => Some(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true),
        ),
        Err(err) => {
            eprintln!("cannot create log file {log_file}: {err}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
