//! Pre-configured HTTP client for the catalog API.
//!
//! Every request is built relative to the configured base URL and passes
//! through a `RequestInterceptor` before it is sent. Errors are returned to
//! the caller as `ApiError`; there is no retry.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::errors::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Explicit client configuration, passed to `ApiClient::new` at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Whole-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Hook applied to every outgoing request (e.g. to attach credentials).
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder;
}

impl<F> RequestInterceptor for F
where
    F: Fn(RequestBuilder) -> RequestBuilder + Send + Sync,
{
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        self(request)
    }
}

/// Default interceptor: forwards the request unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl RequestInterceptor for PassThrough {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        // Credentials would be attached here.
        request
    }
}

/// Cloneable handle; clones share the connection pool and the interceptor.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    interceptor: Arc<dyn RequestInterceptor>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let raw = config.base_url.trim();
        let base_url = Url::parse(raw).map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "not a hierarchical url".into(),
            });
        }

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url,
            interceptor: Arc::new(PassThrough),
        })
    }

    /// Replace the request interceptor.
    pub fn with_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptor = Arc::new(interceptor);
        self
    }

    /// Absolute URL for an API path such as `/categories`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = self.http.get(&url);
        self.send("GET", url, request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let request = self.http.post(&url).json(body);
        self.send("POST", url, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: String,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = self.interceptor.intercept(request);
        debug!(method, %url, "sending request");

        let response = request.send().await.map_err(|e| {
            warn!(method, %url, error = %e, "request failed");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            warn!(method, %url, %status, "unexpected status");
            return Err(ApiError::Status {
                method,
                url,
                status,
                body,
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(client.url("/categories"), "http://localhost:3000/categories");

        let client = ApiClient::new(ApiConfig::new("http://api.test/v1")).unwrap();
        assert_eq!(
            client.url("categories/subcategory/4/labels"),
            "http://api.test/v1/categories/subcategory/4/labels"
        );
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let err = ApiClient::new(ApiConfig::new("localhost:3000")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }), "{err}");

        let err = ApiClient::new(ApiConfig::new("/api")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }), "{err}");
    }

    #[test]
    fn default_config_targets_localhost() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert!(cfg.timeout.is_none());
    }
}
