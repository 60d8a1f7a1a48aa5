use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::use_cases::waitlist::CaptchaVerifier;

/// Verifies Cloudflare Turnstile tokens against the `siteverify` endpoint.
///
/// Without a secret every token is accepted. With one, anything other than a
/// 2xx JSON reply carrying `"success": true` is a rejection.
#[derive(Clone)]
pub struct TurnstileVerifier {
    client: Client,
    secret: Option<SecretString>,
    verify_url: Url,
}

impl TurnstileVerifier {
    /// `client` should come from `infra::http_client` so the call is bounded.
    pub fn new(client: Client, secret: Option<SecretString>, verify_url: Url) -> Self {
        Self {
            client,
            secret,
            verify_url,
        }
    }

    async fn siteverify(
        &self,
        secret: &SecretString,
        token: &str,
        remote_ip: Option<&str>,
    ) -> Result<SiteverifyResp, reqwest::Error> {
        let form = SiteverifyReq {
            secret: secret.expose_secret(),
            response: token,
            remoteip: remote_ip,
        };

        self.client
            .post(self.verify_url.clone())
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json::<SiteverifyResp>()
            .await
    }
}

#[derive(Serialize)]
struct SiteverifyReq<'a> {
    secret: &'a str,
    response: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    remoteip: Option<&'a str>,
}

#[derive(Deserialize)]
struct SiteverifyResp {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

#[async_trait]
impl CaptchaVerifier for TurnstileVerifier {
    async fn verify(&self, token: &str, remote_ip: Option<&str>) -> bool {
        let Some(secret) = &self.secret else {
            tracing::warn!("TURNSTILE_SECRET_KEY not set, skipping verification");
            return true;
        };

        match self.siteverify(secret, token, remote_ip).await {
            Ok(resp) => {
                if !resp.success {
                    tracing::debug!(error_codes = ?resp.error_codes, "Turnstile rejected token");
                }
                resp.success
            }
            Err(err) => {
                tracing::error!(error = %err, "Turnstile validation error");
                false
            }
        }
    }
}
