//! Fixed client configuration with optional overrides from the command line or
//! environment. Defaults mirror the local docker deployment of the backend.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_USERNAME: &str = "serviciudad";
pub const DEFAULT_PASSWORD: &str = "dev2025";

/// Health-check timeout used by the login flow.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(5);
/// Default timeout for a debt inquiry.
pub const INQUIRY_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout of the connectivity probe shown on page load.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);
/// Inactivity window before a forced logout.
pub const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(30 * 60);
/// Delay between a successful login and the redirect to the main page.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub username: String,
    pub password: SecretString,
    pub login_timeout: Duration,
    pub inquiry_timeout: Duration,
    pub probe_timeout: Duration,
    pub inactivity_timeout: Duration,
    pub redirect_delay: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: SecretString::from(DEFAULT_PASSWORD),
            login_timeout: LOGIN_TIMEOUT,
            inquiry_timeout: INQUIRY_TIMEOUT,
            probe_timeout: PROBE_TIMEOUT,
            inactivity_timeout: INACTIVITY_TIMEOUT,
            redirect_delay: REDIRECT_DELAY,
        }
    }
}

/// Values that may replace the defaults. Blank strings are ignored.
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub inquiry_timeout: Option<Duration>,
}

impl ApiConfig {
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let mut config = Self::default();
        config.apply(Overrides {
            base_url: Some(base_url.to_string()),
            ..Overrides::default()
        });
        config
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(value) = overrides.base_url.as_deref().and_then(normalize) {
            self.base_url = value;
        }
        if let Some(value) = overrides.username.as_deref().and_then(normalize) {
            self.username = value;
        }
        if let Some(value) = overrides
            .password
            .as_ref()
            .and_then(|secret| normalize(secret.expose_secret()))
        {
            self.password = SecretString::from(value);
        }
        if let Some(timeout) = overrides.inquiry_timeout.filter(|t| !t.is_zero()) {
            self.inquiry_timeout = timeout;
        }
    }

    /// Whether the supplied pair equals the expected credentials exactly.
    #[must_use]
    pub fn credentials_match(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password.expose_secret()
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
