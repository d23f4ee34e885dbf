//! Main storefront client.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::error::{ClientError, Result};
use crate::types::ClientConfig;

/// HTTP client for a Fourleaf storefront backend.
///
/// One client per backend; cheap to clone (the underlying connection pool
/// is shared). Stream resolution and uploads hang off this type in
/// `stream.rs` and `upload.rs`.
///
/// # Example
///
/// ```ignore
/// use fourleaf_server_client::{ClientConfig, StorefrontClient};
///
/// let config = ClientConfig::with_token("https://store.example.com", "token");
/// let client = StorefrontClient::new(config)?;
///
/// let resource = client
///     .stream_url(LibrarySource::Catalog, &TrackId::new("trk_1"))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl StorefrontClient {
    /// Create a client for the given backend.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Fourleaf/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            access_token: config.access_token,
        })
    }

    /// The normalized backend URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the client carries a bearer token.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Attach the bearer token, when one is configured.
    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Build a full endpoint URL from a path under `/api`.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    /// Map transport-level failures to a dedicated error.
    pub(crate) fn transport_error(err: reqwest::Error) -> ClientError {
        if err.is_connect() || err.is_timeout() {
            ClientError::ServerUnreachable(err.to_string())
        } else {
            ClientError::Request(err)
        }
    }
}
