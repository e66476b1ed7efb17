// ============================================================================
// SERVICES - HTTP only (no UI logic)
// ============================================================================

pub mod api_client;
pub mod error;
pub mod http;

#[cfg(test)]
pub mod mock;

pub use api_client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use http::{HttpRequest, HttpResponse, Method, Transport};

#[cfg(target_arch = "wasm32")]
pub use http::GlooTransport;
