//! Blocking HTTP client for a SwaggerHub-compatible registry.

use reqwest::blocking::{Client, RequestBuilder, Response};

use crate::error::{Error, FailureKind, Result};
use crate::request::ApiRequest;

/// Fixed User-Agent sent on every registry request.
const USER_AGENT: &str = "apihub-sync";

/// Connection settings for one registry endpoint.
///
/// Built once per invocation and shared across calls; holds no mutable
/// state. On-premise registries require an extra leading path segment
/// (`on_premise_suffix`, defaults to "v1") before `apis/...`.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Registry hostname.
    pub host: String,

    /// Registry port.
    pub port: u16,

    /// URL scheme ("http" or "https").
    pub scheme: String,

    /// API key sent verbatim in the `Authorization` header. Optional
    /// for fetch, required for publish and set-default.
    pub token: Option<String>,

    /// Target a self-hosted registry instead of the public cloud.
    pub on_premise: bool,

    /// Path prefix used when `on_premise` is set.
    pub on_premise_suffix: String,
}

impl RegistryConfig {
    /// Create a configuration for the given host with HTTPS on port 443.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 443,
            scheme: "https".to_string(),
            token: None,
            on_premise: false,
            on_premise_suffix: "v1".to_string(),
        }
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the URL scheme.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set the API key.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Enable or disable on-premise path prefixing.
    pub fn with_on_premise(mut self, on_premise: bool) -> Self {
        self.on_premise = on_premise;
        self
    }

    /// Override the on-premise path prefix (defaults to "v1").
    pub fn with_on_premise_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.on_premise_suffix = suffix.into();
        self
    }
}

/// Client for fetching and publishing API definitions.
///
/// Each operation issues exactly one blocking HTTP exchange and maps
/// the outcome onto [`Error`]: the response body on success, or a
/// failure tagged as empty-body, bad-status (carrying the body text)
/// or transport.
pub struct RegistryClient {
    config: RegistryConfig,
    http: Client,
}

impl RegistryClient {
    /// Create a client for the given registry endpoint.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self { config, http })
    }

    /// Download an API definition.
    ///
    /// Issues `GET /apis/{owner}/{api}/{version}?resolved={resolved}`
    /// and returns the response body verbatim.
    pub fn fetch_definition(&self, request: &ApiRequest) -> Result<String> {
        let url = format!(
            "{}/{}?resolved={}",
            self.api_base(request),
            request.version,
            request.resolved
        );
        tracing::debug!(%url, "fetching API definition");

        let mut http_request = self
            .http
            .get(&url)
            .header("Accept", media_type(&request.format));
        if let Some(token) = &self.config.token {
            http_request = http_request.header("Authorization", token);
        }

        let response = http_request
            .send()
            .map_err(|e| Error::Fetch(FailureKind::Transport(e)))?;
        let (status, body) = read_response(response).map_err(Error::Fetch)?;

        if body.is_empty() {
            Err(Error::Fetch(FailureKind::EmptyBody))
        } else if !status.is_success() {
            Err(Error::Fetch(FailureKind::BadStatus(body)))
        } else {
            Ok(body)
        }
    }

    /// Publish an API definition.
    ///
    /// Issues `POST /apis/{owner}/{api}?version={v}&isPrivate={p}&oas={o}`
    /// with the document text as the raw payload. The version travels
    /// as a query parameter here, not a path segment.
    pub fn publish_definition(&self, request: &ApiRequest) -> Result<()> {
        let url = format!(
            "{}?version={}&isPrivate={}&oas={}",
            self.api_base(request),
            request.version,
            request.private,
            request.oas.as_deref().unwrap_or("2.0")
        );
        tracing::debug!(%url, "publishing API definition");

        let body = request.definition.clone().unwrap_or_default();
        let http_request = self
            .http
            .post(&url)
            .header("Content-Type", media_type(&request.format))
            .header("Authorization", self.require_token()?)
            .body(body);

        self.execute_write(http_request)
    }

    /// Mark the request's version as the API's default version.
    ///
    /// Issues `PUT /apis/{owner}/{api}/settings/default` with a
    /// single-field JSON body `{"version": "<v>"}`.
    pub fn set_default_version(&self, request: &ApiRequest) -> Result<()> {
        let url = format!("{}/settings/default", self.api_base(request));
        tracing::debug!(%url, version = %request.version, "setting default version");

        let body = serde_json::json!({ "version": request.version });
        let http_request = self
            .http
            .put(&url)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("Authorization", self.require_token()?)
            .body(body.to_string());

        self.execute_write(http_request)
    }

    /// Base URL up to the API segment, with the on-premise prefix when
    /// configured. Owner and API segments are inserted verbatim.
    fn api_base(&self, request: &ApiRequest) -> String {
        let config = &self.config;
        let prefix = if config.on_premise {
            format!("{}/", config.on_premise_suffix)
        } else {
            String::new()
        };

        format!(
            "{}://{}:{}/{}apis/{}/{}",
            config.scheme, config.host, config.port, prefix, request.owner, request.api
        )
    }

    fn require_token(&self) -> Result<&str> {
        self.config.token.as_deref().ok_or_else(|| {
            Error::InvalidRequest("an authorization token is required for this operation".into())
        })
    }

    /// Send a publish-style request and classify the outcome.
    fn execute_write(&self, http_request: RequestBuilder) -> Result<()> {
        let response = http_request
            .send()
            .map_err(|e| Error::Write(FailureKind::Transport(e)))?;
        let (status, body) = read_response(response).map_err(Error::Write)?;

        if body.is_empty() {
            Err(Error::Write(FailureKind::EmptyBody))
        } else if !status.is_success() {
            Err(Error::Write(FailureKind::BadStatus(body)))
        } else {
            Ok(())
        }
    }
}

/// Drain a response into its status and body text. Consuming the body
/// also releases the underlying connection on every path.
fn read_response(
    response: Response,
) -> std::result::Result<(reqwest::StatusCode, String), FailureKind> {
    let status = response.status();
    let body = response.text().map_err(FailureKind::Transport)?;
    Ok((status, body))
}

/// Media type for Accept/Content-Type headers. Falls back to the JSON
/// media type when the format does not yield a parseable one.
fn media_type(format: &str) -> String {
    let candidate = format!("application/{format}; charset=utf-8");
    if candidate.parse::<mime::Mime>().is_ok() {
        candidate
    } else {
        "application/json; charset=utf-8".to_string()
    }
}
