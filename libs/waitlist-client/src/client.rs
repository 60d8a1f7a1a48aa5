//! HTTP client for the waitlist API.

use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;
use waitlist_types::{ErrorBody, JoinWaitlistRequest, WaitlistEntry, WidgetConfig};

use crate::error::ClientError;

/// Total time allowed for one request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the waitlist endpoints under `{base_url}/api/`.
#[derive(Debug, Clone)]
pub struct WaitlistClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl WaitlistClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Origin serving the API (e.g., "https://example.com")
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base URL cannot carry paths: {base_url}"
            )));
        }
        // Url::join replaces the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Submit a sign-up.
    ///
    /// # Returns
    /// The created entry, or `None` when the server accepted the sign-up but
    /// replied with a body this client cannot read. Non-2xx replies become
    /// `ClientError::Rejected` carrying the server's `message`.
    pub async fn join(
        &self,
        request: &JoinWaitlistRequest,
    ) -> Result<Option<WaitlistEntry>, ClientError> {
        let response = self
            .http_client
            .post(self.endpoint("api/waitlist")?)
            .json(request)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        Ok(response.json::<WaitlistEntry>().await.ok())
    }

    /// Fetch the public settings for the challenge widget.
    pub async fn widget_config(&self) -> Result<WidgetConfig, ClientError> {
        let response = self
            .http_client
            .get(self.endpoint("api/waitlist/config")?)
            .send()
            .await?;

        read_json(ensure_success(response).await?).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("invalid endpoint {path}: {e}")))
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("Request failed with status {status}"),
    };
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    Ok(response.json::<T>().await?)
}
