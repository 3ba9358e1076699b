//! Browser transport: sends `common` requests with `gloo-net`.

use common::client::HttpTransport;
use common::error::{Error, Result};
use common::requests::{ApiRequest, ApiResponse, Method};
use gloo_net::http::{Request, RequestBuilder};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = builder_for(request.method, &request.url);
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let sent = match &request.body {
            Some(body) => builder.json(body).map_err(transport_error)?.send().await,
            None => builder.send().await,
        };
        let response = sent.map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        Ok(ApiResponse::new(status, body))
    }
}

fn builder_for(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
    }
}

fn transport_error(e: gloo_net::Error) -> Error {
    Error::Transport(e.to_string())
}
