//! Thin client for the Apache Ranger policy-management REST API.
//!
//! Wraps an HTTP transport with basic authentication and exposes CRUD over
//! policies plus read access to services (`/service/public/v2/api/...`).
//! Each call is one request/response exchange — no sessions, retries, or
//! pagination. Validation of policy semantics is left to the server.
//!
//! # Usage
//!
//! ```ignore
//! use ranger_client::{Policy, RangerClient};
//!
//! let client = RangerClient::new("http://ranger:6080", "admin", "secret");
//! let policies = client.get_policies(Some("kafka-prod")).await?;
//! let one = client.get_policy(42).await?;
//! ```

use serde::de::DeserializeOwned;
use tracing::debug;

pub mod model;

pub use model::{Access, Policy, PolicyItem, ResourceType, Resources, Service};


// ── Error ───────────────────────────────────────────────────────────

/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum RangerError {
    /// Non-2xx response; carries the status code and raw body text.
    /// Specific codes are not interpreted (a 404 is not special-cased).
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection-level failure (DNS, TCP, TLS). The reqwest error
    /// carries the target URL.
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// Precondition failed before any network call was made.
    #[error("validation: {0}")]
    Validation(String),

    /// Response body is not valid JSON or does not match the expected shape.
    #[error("decode: {0}")]
    Decode(String),
}

// ── RangerClient ────────────────────────────────────────────────────

/// Authenticated client for one Ranger instance.
///
/// Immutable after construction; `&self` methods are safe to call
/// concurrently. Timeouts and TLS belong to the injected
/// [`reqwest::Client`] — this type adds none of its own.
pub struct RangerClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl RangerClient {
    /// No network activity happens here; the first request is sent by the
    /// first operation called.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Replace the default transport with a caller-configured one
    /// (timeouts, proxies, TLS roots).
    pub fn with_http(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Policy collection endpoint.
    fn policy_url(&self) -> String {
        format!("{}/service/public/v2/api/policy", self.base_url)
    }

    /// Per-policy endpoint.
    fn policy_item_url(&self, id: i64) -> String {
        format!("{}/{}", self.policy_url(), id)
    }

    /// Service collection endpoint.
    fn service_url(&self) -> String {
        format!("{}/service/public/v2/api/service", self.base_url)
    }

    /// Attach basic-auth credentials. Applied to every request.
    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.basic_auth(&self.username, Some(&self.password))
    }

    /// Parse a response, mapping non-2xx statuses to [`RangerError::Status`].
    /// Consumes the body on every path.
    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, RangerError> {
        let status = resp.status();
        if !status.is_success() {
            let code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(RangerError::Status { status: code, body });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| RangerError::Decode(format!("response body: {}", e)))
    }

    /// Fetch one policy by its numeric ID.
    pub async fn get_policy(&self, id: i64) -> Result<Policy, RangerError> {
        let url = self.policy_item_url(id);
        debug!(%url, "get policy");
        let resp = self.authed(self.http.get(&url)).send().await?;
        Self::parse(resp).await
    }

    /// List policies, optionally filtered to a single service name.
    ///
    /// The filter is percent-encoded by the query builder; an empty name is
    /// treated the same as no filter. Order is whatever the server returned.
    pub async fn get_policies(&self, service_name: Option<&str>) -> Result<Vec<Policy>, RangerError> {
        let url = self.policy_url();
        debug!(%url, filter = service_name, "list policies");
        let mut req = self.http.get(&url);
        if let Some(name) = service_name {
            if !name.is_empty() {
                req = req.query(&[("serviceName", name)]);
            }
        }
        let resp = self.authed(req).send().await?;
        Self::parse(resp).await
    }

    /// Create a policy. The server assigns the ID; the returned record is
    /// the server's representation of the created resource.
    pub async fn create_policy(&self, policy: &Policy) -> Result<Policy, RangerError> {
        let url = self.policy_url();
        debug!(%url, name = %policy.name, "create policy");
        let resp = self.authed(self.http.post(&url).json(policy)).send().await?;
        Self::parse(resp).await
    }

    /// Update a policy in place. The target ID is taken from the policy's
    /// own `id` field; a policy that was never created (no ID) is rejected
    /// without touching the network.
    pub async fn update_policy(&self, policy: &Policy) -> Result<Policy, RangerError> {
        let id = policy.id.ok_or_else(|| {
            RangerError::Validation("policy has no id; update requires a server-assigned id".into())
        })?;
        let url = self.policy_item_url(id);
        debug!(%url, "update policy");
        let resp = self.authed(self.http.put(&url).json(policy)).send().await?;
        Self::parse(resp).await
    }

    /// Delete a policy by ID. Any response body is discarded.
    pub async fn delete_policy(&self, id: i64) -> Result<(), RangerError> {
        let url = self.policy_item_url(id);
        debug!(%url, "delete policy");
        let resp = self.authed(self.http.delete(&url)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(RangerError::Status { status: code, body });
        }
        Ok(())
    }

    /// List all registered services.
    pub async fn get_services(&self) -> Result<Vec<Service>, RangerError> {
        let url = self.service_url();
        debug!(%url, "list services");
        let resp = self.authed(self.http.get(&url)).send().await?;
        Self::parse(resp).await
    }
}
