use reqwest::header::CONTENT_TYPE;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{RequestError, CONNECTION_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE};

/// Default target: a backend running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "DOCUCHAT_API_URL";

/// Base-URL configuration for [`ApiClient`].
///
/// Resolution order: explicit override, then the `DOCUCHAT_API_URL`
/// environment variable, then the fixed local default. The value is carried
/// explicitly rather than read from a process-wide global so tests can
/// construct clients against ephemeral servers without touching the
/// environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from an optional override, falling back to the fixed default.
    pub fn resolve(override_url: Option<String>) -> Self {
        match override_url {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Construct from the environment with a local-first default:
    ///
    /// | Variable           | Default                     |
    /// |--------------------|-----------------------------|
    /// | `DOCUCHAT_API_URL` | `http://localhost:8000/api` |
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(BASE_URL_ENV).ok())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

/// Generic JSON transport shared by every typed client.
///
/// Exposes `get`, `post` (JSON body), and `upload` (multipart body) with
/// uniform error surfacing: any non-success status becomes
/// [`RequestError::Api`] carrying the message resolved from the error body.
/// The cookie jar is enabled so session credentials set by the server are
/// replayed on later requests, the equivalent of a browser fetch with
/// `credentials: 'include'`.
///
/// By contract this layer adds no retries, timeouts, backoff, in-flight
/// deduplication, or cancellation; a call is a single-shot request owned
/// entirely by its caller.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .unwrap_or_default(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Issue a read request and return the parsed JSON body unmodified.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, RequestError> {
        let url = self.config.url_for(endpoint);
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| RequestError::transport(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Serialize `data` as a JSON body, otherwise identical to [`Self::get`].
    pub async fn post<B, T>(&self, endpoint: &str, data: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.url_for(endpoint);
        debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .json(data)
            .send()
            .await
            .map_err(|e| RequestError::transport(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Send a pre-built multipart payload.
    ///
    /// No content-type is set manually; the transport fills in the multipart
    /// boundary itself.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: multipart::Form,
    ) -> Result<T, RequestError> {
        let url = self.config.url_for(endpoint);
        debug!("POST {url} (multipart)");

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RequestError::transport(e.to_string()))?;

        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RequestError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("API returned {status}: {body}");
            return Err(RequestError::Api(error_message(&body)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RequestError::decode(e.to_string()))
    }
}

/// Resolve the human-readable message of an error body.
///
/// Priority: the body's `message` field, then a fixed fallback depending on
/// whether the body parsed as JSON at all.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        Err(_) => CONNECTION_ERROR_MESSAGE.to_string(),
    }
}
