// ============================================================================
// HTTP - Request/response values + transport seam
// ============================================================================
// The API client only builds HttpRequest values; a Transport sends them.
// On wasm32 that is gloo-net (fetch); tests plug in a recording mock.
// ============================================================================

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use super::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Append a header
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Serialize `body` as the JSON payload
    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> ApiResult<Self> {
        let payload = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(payload);
        Ok(request)
    }

    /// Header lookup, case-insensitive like HTTP
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn non-2xx responses into `ApiError::Http`
    pub fn error_for_status(self) -> ApiResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Http {
                status: self.status,
                body: self.body,
            })
        }
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends a fully-built request. Futures are `!Send` (browser main thread).
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

#[cfg(target_arch = "wasm32")]
pub use gloo::GlooTransport;

#[cfg(target_arch = "wasm32")]
mod gloo {
    use async_trait::async_trait;
    use gloo_net::http::Request;

    use super::{HttpRequest, HttpResponse, Method, Transport};
    use crate::services::error::{ApiError, ApiResult};

    /// fetch() through gloo-net
    #[derive(Debug, Default, Clone, Copy)]
    pub struct GlooTransport;

    #[async_trait(?Send)]
    impl Transport for GlooTransport {
        async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Encode(e.to_string()))?;

            let response = prepared
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;

            Ok(HttpResponse { status, body })
        }
    }
}
