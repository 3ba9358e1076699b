//! Typed access to the backend and to IBGE over an injected transport.

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::requests::{ApiRequest, ApiResponse, Method};

/// Sends one request and hands back whatever the server answered.
///
/// Implementations report only transport failures as `Err`; a 4xx/5xx is a
/// successful send and is turned into [`Error::Status`] by [`ApiClient`].
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
    token: Option<String>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            transport,
            config,
            token: None,
        }
    }

    /// Same client, authenticating backend calls with `token`.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET` a backend resource and decode it.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let request = self.backend(Method::Get, path);
        let response = self.execute(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// `GET` an IBGE resource and decode it. IBGE is public, so the session
    /// token is never sent there.
    pub async fn get_geo<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let request = ApiRequest::new(Method::Get, self.config.geo_url(path));
        let response = self.execute(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let request = self
            .backend(Method::Post, path)
            .with_body(serde_json::to_value(body)?);
        self.execute(request).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let request = self
            .backend(Method::Put, path)
            .with_body(serde_json::to_value(body)?);
        self.execute(request).await
    }

    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let request = self
            .backend(Method::Patch, path)
            .with_body(serde_json::to_value(body)?);
        self.execute(request).await
    }

    pub(crate) fn backend(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.config.api_url(path)).with_bearer(self.token.clone())
    }

    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = request.method;
        let url = request.url.clone();
        debug!("{method} {url}");

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            warn!("{method} {url} answered {}", response.status);
            Err(Error::Status {
                status: response.status,
                body: response.body,
            })
        }
    }
}
