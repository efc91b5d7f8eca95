//! HTTP helpers for the ServiCiudad REST API with a consistent timeout policy.
//! Each request gets its own cancellation token that fires when the timeout
//! elapses, so a hung backend never leaves a handler waiting. The helpers only
//! attach the credentials callers hand them; they never log secrets.

use super::errors::RequestError;
use crate::APP_USER_AGENT;
use base64ct::{Base64, Encoding};
use reqwest::{header, Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use std::{fmt, time::Duration};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn, Span};
use ulid::Ulid;

pub const HEALTH_PATH: &str = "/actuator/health";
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Username/password pair sent with HTTP Basic auth.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: SecretString::from(password.to_string()),
        }
    }

    /// `Basic base64(username:password)`
    #[must_use]
    pub fn header_value(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password.expose_secret());
        format!("Basic {}", Base64::encode_string(pair.as_bytes()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of the unauthenticated health probe shown on page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Connected,
    Disconnected,
}

impl Connectivity {
    #[must_use]
    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }

    #[must_use]
    pub fn message(self, base_url: &str) -> String {
        match self {
            Self::Connected => format!("Servidor conectado ({base_url})"),
            Self::Disconnected => {
                "Servidor desconectado. Ejecute: docker-compose up -d".to_string()
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, RequestError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|err| RequestError::Build(err.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        build_url_with_base(&self.base_url, path)
    }

    /// Sends a GET with optional Basic auth, cancelled once `timeout` elapses.
    ///
    /// # Errors
    /// Returns `RequestError::Timeout` when the token fires first and
    /// `RequestError::Network` when the server cannot be reached.
    #[instrument(skip(self, credentials), fields(request_id = tracing::field::Empty))]
    pub async fn get(
        &self,
        path: &str,
        credentials: Option<&Credentials>,
        timeout: Duration,
    ) -> Result<Response, RequestError> {
        let request_id = Ulid::new().to_string();
        Span::current().record("request_id", request_id.as_str());

        let mut builder = self
            .http
            .get(self.url(path))
            .header(header::CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, request_id.as_str());

        if let Some(credentials) = credentials {
            builder = builder.header(header::AUTHORIZATION, credentials.header_value());
        }

        let response = send_with_timeout(builder, timeout).await?;

        debug!("{} responded {}", path, response.status());

        Ok(response)
    }

    /// Unauthenticated reachability check against the health endpoint.
    pub async fn probe(&self, timeout: Duration) -> Connectivity {
        match self.get(HEALTH_PATH, None, timeout).await {
            Ok(response) if response.status().is_success() => Connectivity::Connected,
            Ok(response) => {
                warn!("health probe returned {}", response.status());
                Connectivity::Disconnected
            }
            Err(err) => {
                warn!("health probe failed: {}", err);
                Connectivity::Disconnected
            }
        }
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: &reqwest::Error) -> RequestError {
    if err.is_timeout() {
        RequestError::Timeout
    } else {
        RequestError::Network(err.to_string())
    }
}

/// Races the request against a cancellation token armed with `timeout`.
async fn send_with_timeout(
    builder: RequestBuilder,
    timeout: Duration,
) -> Result<Response, RequestError> {
    let token = CancellationToken::new();

    let timer_token = token.clone();
    let timer = tokio::spawn(async move {
        sleep(timeout).await;
        timer_token.cancel();
    });

    let result = tokio::select! {
        () = token.cancelled() => Err(RequestError::Timeout),
        response = builder.send() => response.map_err(|err| map_request_error(&err)),
    };

    timer.abort();

    result
}
