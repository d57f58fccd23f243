//! HTTP client for the portfolio API.
//!
//! Drives the same [`folio_core::contract`] the server mounts: request bodies
//! are validated with the route's input schema before sending, and every
//! response body is checked against the schema the route declares for its
//! status before it is decoded.

use folio_core::contract::{self, ContractError, Method, Route};
use folio_core::models::{Message, NewMessage, Profile, ProfileUpdate, Project, Testimonial};
use folio_core::schema::ValidationError;
use folio_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Errors from the portfolio API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The payload failed validation locally and was never sent.
    #[error("invalid request: {0}")]
    Invalid(ValidationError),

    /// The server answered 400.
    #[error("request rejected: {message}")]
    Rejected {
        message: String,
        field: Option<String>,
    },

    /// The server answered 5xx.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response did not match the contract.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// The body was not JSON or did not decode into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A contract-conforming answer.
#[derive(Debug, PartialEq)]
enum Reply {
    Success(Value),
    NotFound,
}

/// HTTP client for one portfolio API deployment.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    client: reqwest::Client,
    base_url: String,
}

impl PortfolioClient {
    /// * `base_url` - scheme and authority, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (connection pooling, custom
    /// timeouts).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The profile, or `None` when the server has none.
    pub async fn profile(&self) -> Result<Option<Profile>, ClientError> {
        self.fetch_optional(&contract::PROFILE_GET, &[]).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ClientError> {
        let reply = self
            .call(&contract::PROFILE_UPDATE, &[], Some(update))
            .await?;
        expect_success(&contract::PROFILE_UPDATE, reply)
    }

    /// Every project in display order.
    pub async fn projects(&self) -> Result<Vec<Project>, ClientError> {
        let reply = self.call::<()>(&contract::PROJECTS_LIST, &[], None).await?;
        expect_success(&contract::PROJECTS_LIST, reply)
    }

    /// One project, or `None` when the id is unknown.
    pub async fn project(&self, id: DbId) -> Result<Option<Project>, ClientError> {
        let id = id.to_string();
        self.fetch_optional(&contract::PROJECT_GET, &[("id", &id)])
            .await
    }

    /// Every testimonial in display order.
    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, ClientError> {
        let reply = self
            .call::<()>(&contract::TESTIMONIALS_LIST, &[], None)
            .await?;
        expect_success(&contract::TESTIMONIALS_LIST, reply)
    }

    /// Send a contact message; returns the stored row.
    pub async fn submit_contact(&self, message: &NewMessage) -> Result<Message, ClientError> {
        let reply = self
            .call(&contract::CONTACT_CREATE, &[], Some(message))
            .await?;
        expect_success(&contract::CONTACT_CREATE, reply)
    }

    // -----------------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------------

    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        route: &Route,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, ClientError> {
        match self.call::<()>(route, params, None).await? {
            Reply::Success(body) => Ok(Some(serde_json::from_value(body)?)),
            Reply::NotFound => Ok(None),
        }
    }

    async fn call<B: Serialize>(
        &self,
        route: &Route,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Reply, ClientError> {
        let url = format!("{}{}", self.base_url, route.url(params));
        let mut request = match route.method {
            Method::Get => self.client.get(&url),
            Method::Put => self.client.put(&url),
            Method::Post => self.client.post(&url),
        };

        if let Some(body) = body {
            let payload = serde_json::to_value(body)?;
            let normalized = route.parse_input(&payload).map_err(ClientError::Invalid)?;
            request = request.json(&normalized);
        }

        tracing::debug!(route = route.name, method = route.method.as_str(), %url, "Sending request");
        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        interpret(route, status, &bytes)
    }
}

/// Map a raw response onto the contract.
fn interpret(route: &Route, status: u16, bytes: &[u8]) -> Result<Reply, ClientError> {
    if status >= 500 {
        let message = serde_json::from_slice::<Value>(bytes)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| String::from_utf8_lossy(bytes).into_owned());
        return Err(ClientError::Server { status, message });
    }

    let body: Value = serde_json::from_slice(bytes)?;
    route.check_response(status, &body)?;

    match status {
        400 => {
            let rejection: ValidationError = serde_json::from_value(body)?;
            Err(ClientError::Rejected {
                message: rejection.message,
                field: rejection.field,
            })
        }
        404 => Ok(Reply::NotFound),
        _ => Ok(Reply::Success(body)),
    }
}

fn expect_success<T: DeserializeOwned>(route: &Route, reply: Reply) -> Result<T, ClientError> {
    match reply {
        Reply::Success(body) => Ok(serde_json::from_value(body)?),
        // Only reachable if a route without a declared 404 grows one.
        Reply::NotFound => Err(ClientError::Contract(ContractError::UndeclaredStatus {
            route: route.name,
            status: 404,
        })),
    }
}
