//! Reference HTTP transport built on `reqwest`.
//!
//! Posts JSON bodies to the daemon's RPC endpoint with optional basic auth.
//! A session id, when configured, is sent as-is; the transport does not
//! negotiate one. A rejected session surfaces as [`TransportError::Status`]
//! carrying the id the daemon proposed.

use std::{env, fmt, time::Duration};

use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use tracing::{debug, instrument};
use url::Url;

use mosaic_transmission_types::TransportError;

use crate::transport::Transport;

/// Default Transmission RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "http://localhost:9091/transmission/rpc";

/// Header carrying the Transmission session id.
pub const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`HttpTransport`].
#[derive(Clone, PartialEq, Eq)]
pub struct HttpTransportConfig {
    /// The RPC endpoint.
    pub url: String,
    /// Basic auth user name. Auth is only sent when this is set.
    pub username: Option<String>,
    /// Basic auth password.
    pub password: Option<String>,
    /// Session id sent with every request.
    pub session_id: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            username: None,
            password: None,
            session_id: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpTransportConfig {
    /// Reads the configuration from the environment, falling back to the defaults.
    ///
    /// Variables: `TRANSMISSION_RPC_URL`, `TRANSMISSION_USERNAME`,
    /// `TRANSMISSION_PASSWORD`, `TRANSMISSION_SESSION_ID`.
    pub fn from_env() -> Self {
        Self {
            url: env::var("TRANSMISSION_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.into()),
            username: env::var("TRANSMISSION_USERNAME").ok(),
            password: env::var("TRANSMISSION_PASSWORD").ok(),
            session_id: env::var("TRANSMISSION_SESSION_ID").ok(),
            ..Default::default()
        }
    }
}

impl fmt::Debug for HttpTransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print credentials.
        f.debug_struct("HttpTransportConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<set>"))
            .field("session_id", &self.session_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// HTTP(S) transport posting to a Transmission RPC endpoint.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    url: Url,
    config: HttpTransportConfig,
}

impl HttpTransport {
    /// Validates the configured URL and builds the HTTP client.
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let url =
            Url::parse(&config.url).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        debug!("HTTP transport ready for {}", url);
        Ok(Self {
            client,
            url,
            config,
        })
    }

    /// The RPC endpoint requests are posted to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Transport for HttpTransport {
    #[instrument(skip_all, fields(url = %self.url, bytes = body.len()))]
    async fn post(&self, body: String) -> Result<Vec<u8>, TransportError> {
        let mut request = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(username) = &self.config.username {
            request = request.basic_auth(username, self.config.password.as_ref());
        }
        if let Some(session_id) = &self.config.session_id {
            request = request.header(SESSION_ID_HEADER, session_id);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Daemon answered with {status}");
        if status == StatusCode::UNAUTHORIZED {
            return Err(TransportError::Unauthorized);
        }
        if !status.is_success() {
            let session_id = response
                .headers()
                .get(SESSION_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            return Err(TransportError::Status {
                status: status.as_u16(),
                session_id,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
