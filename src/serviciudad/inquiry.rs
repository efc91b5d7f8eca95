//! Debt inquiry: input filtering, validation, the authenticated request and the
//! mapping of every HTTP outcome to a terminal result.
//!
//! Every inquiry is made on behalf of the session held by a [`SessionContext`];
//! without one nothing is sent.
//!
//! Per inquiry: `Idle -> Validating -> Idle` on a malformed id, otherwise
//! `Validating -> Loading -> Displaying` on success or `Loading -> Idle` with the
//! error kept for display.

use super::{
    api::{ApiClient, Credentials},
    client_id::{filter_input, ClientId},
    config::ApiConfig,
    control::SubmitControl,
    errors::{InquiryError, RequestError},
    models::DebtSummary,
    session::{SessionContext, SessionStorage},
};
use reqwest::{Response, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

pub const DEBT_PATH: &str = "/api/deuda/cliente";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryState {
    Idle,
    Validating,
    Loading,
    Displaying,
}

#[derive(Debug)]
pub struct InquiryClient {
    config: ApiConfig,
    api: ApiClient,
    credentials: Credentials,
    control: SubmitControl,
    state: InquiryState,
    input: String,
    result: Option<DebtSummary>,
    error: Option<InquiryError>,
}

impl InquiryClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, RequestError> {
        let api = ApiClient::new(&config.base_url)?;
        let credentials = Credentials::new(&config.username, config.password.expose_secret());

        Ok(Self {
            config,
            api,
            credentials,
            control: SubmitControl::new(),
            state: InquiryState::Idle,
            input: String::new(),
            result: None,
            error: None,
        })
    }

    /// Applies the typing filter and stores the field value.
    pub fn input(&mut self, raw: &str) -> &str {
        self.input = filter_input(raw);
        &self.input
    }

    #[must_use]
    pub fn input_value(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn state(&self) -> InquiryState {
        self.state
    }

    #[must_use]
    pub fn result(&self) -> Option<&DebtSummary> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&InquiryError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    /// Submits the current field value.
    ///
    /// # Errors
    /// See [`InquiryClient::consult`].
    pub async fn submit<S: SessionStorage>(
        &mut self,
        session: &SessionContext<S>,
    ) -> Result<&DebtSummary, InquiryError> {
        let value = self.input.clone();
        self.consult(session, &value).await
    }

    /// Runs one inquiry for `raw`. Neither a closed session nor a malformed id
    /// reaches the network.
    ///
    /// # Errors
    /// Returns the `InquiryError` that ended the attempt; it is also kept in
    /// [`InquiryClient::error`] for display.
    pub async fn consult<S: SessionStorage>(
        &mut self,
        session: &SessionContext<S>,
        raw: &str,
    ) -> Result<&DebtSummary, InquiryError> {
        let Some(_guard) = self.control.disable() else {
            return Err(InquiryError::InProgress);
        };

        self.result = None;
        self.error = None;

        if !session.is_authenticated() {
            return Err(self.fail(InquiryError::SessionExpired));
        }

        self.state = InquiryState::Validating;

        let client_id = match raw.parse::<ClientId>() {
            Ok(client_id) => client_id,
            Err(err) => return Err(self.fail(err)),
        };

        self.state = InquiryState::Loading;

        match self.query_debt(&client_id).await {
            Ok(summary) => {
                self.state = InquiryState::Displaying;
                Ok(&*self.result.insert(summary))
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn fail(&mut self, err: InquiryError) -> InquiryError {
        debug!("inquiry failed: {}", err);
        self.state = InquiryState::Idle;
        self.error = Some(err.clone());
        err
    }

    /// Clears the field, the result and the error, ready for another inquiry.
    pub fn new_inquiry(&mut self) {
        self.input.clear();
        self.result = None;
        self.error = None;
        self.state = InquiryState::Idle;
    }

    /// `GET /api/deuda/cliente/{id}` with Basic auth and the inquiry timeout.
    ///
    /// # Errors
    /// Returns the `InquiryError` matching the HTTP status or transport failure.
    #[instrument(skip(self), fields(client_id = %client_id))]
    pub async fn query_debt(&self, client_id: &ClientId) -> Result<DebtSummary, InquiryError> {
        let path = format!("{DEBT_PATH}/{client_id}");

        let response = self
            .api
            .get(&path, Some(&self.credentials), self.config.inquiry_timeout)
            .await
            .map_err(|err| {
                error!("debt inquiry failed: {}", err);
                InquiryError::from(err)
            })?;

        map_response(response, client_id).await
    }
}

async fn map_response(response: Response, client_id: &ClientId) -> Result<DebtSummary, InquiryError> {
    let status = response.status();

    if status.is_success() {
        let summary = response
            .json::<DebtSummary>()
            .await
            .map_err(|err| InquiryError::Parse(err.to_string()))?;

        info!("debt inquiry answered, total {}", summary.total_a_pagar);

        return Ok(summary);
    }

    let body = response.text().await.unwrap_or_default();

    Err(map_status(status, client_id, &body))
}

/// Maps a non-success status to its error. Total over every status code.
#[must_use]
pub fn map_status(status: StatusCode, client_id: &ClientId, body: &str) -> InquiryError {
    match status {
        StatusCode::UNAUTHORIZED => InquiryError::Auth,
        StatusCode::NOT_FOUND => InquiryError::NotFound {
            client_id: client_id.to_string(),
        },
        StatusCode::TOO_MANY_REQUESTS => InquiryError::RateLimited,
        StatusCode::INTERNAL_SERVER_ERROR => InquiryError::Server {
            message: server_message(body),
        },
        other => InquiryError::Http {
            status: other.as_u16(),
        },
    }
}

/// `mensaje` (or `message`) from a JSON error body, if any.
fn server_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;

    ["mensaje", "message"]
        .iter()
        .filter_map(|key| json.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}
