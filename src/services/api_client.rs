// ============================================================================
// API CLIENT - HTTP only (stateless apart from reading the stored token)
// ============================================================================
// Every request goes through `send`, which attaches
// `Authorization: Bearer <access_token>` when a token is stored.
// Errors are returned untouched: no retry, no refresh-token exchange.
// ============================================================================

use std::rc::Rc;

use serde_json::Value;

use super::error::ApiResult;
use super::http::{HttpRequest, HttpResponse, Transport};
use crate::models::{
    Application, CurrentUser, LoginRequest, NewApplication, RegisterRequest, StatusUpdateRequest,
    TokenPair,
};
use crate::utils::{KeyValueStore, ACCESS_TOKEN_KEY};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    storage: Rc<dyn KeyValueStore>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        storage: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            storage,
        }
    }

    /// Client for the configured API using fetch()
    #[cfg(target_arch = "wasm32")]
    pub fn from_config(storage: Rc<dyn KeyValueStore>) -> Self {
        use super::http::GlooTransport;
        use crate::config::CONFIG;

        Self::new(CONFIG.api_base_url(), Rc::new(GlooTransport), storage)
    }

    /// Join base URL and endpoint path with exactly one slash
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        match self.storage.get(ACCESS_TOKEN_KEY) {
            Some(token) if !token.is_empty() => {
                request.header("Authorization", &format!("Bearer {}", token))
            }
            _ => request,
        }
    }

    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let request = self.authorize(request);
        let method = request.method;
        let url = request.url.clone();

        log::debug!("🌐 [API] {} {}", method.as_str(), url);

        let response = self.transport.send(request).await.and_then(HttpResponse::error_for_status);
        if let Err(e) = &response {
            log::debug!("❌ [API] {} {} failed: {}", method.as_str(), url, e);
        }
        response
    }

    /// `POST auth/login/`
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<TokenPair> {
        log::info!("🔐 [API] Logging in as {}", credentials.username);
        let request = HttpRequest::post(self.endpoint("auth/login/")).json(credentials)?;
        self.send(request).await?.json()
    }

    /// `GET auth/user/`
    pub async fn current_user(&self) -> ApiResult<CurrentUser> {
        let request = HttpRequest::get(self.endpoint("auth/user/"));
        self.send(request).await?.json()
    }

    /// `POST auth/register/`
    pub async fn register(&self, registration: &RegisterRequest) -> ApiResult<()> {
        log::info!("📝 [API] Registering {}", registration.username);
        let request = HttpRequest::post(self.endpoint("auth/register/")).json(registration)?;
        self.send(request).await.map(|_| ())
    }

    /// `GET student/applications/` (scoped server-side to the caller)
    pub async fn list_applications(&self) -> ApiResult<Vec<Application>> {
        let request = HttpRequest::get(self.endpoint("student/applications/"));
        let applications: Vec<Application> = self.send(request).await?.json()?;
        log::info!("📋 [API] {} applications received", applications.len());
        Ok(applications)
    }

    /// `POST student/applications/`
    pub async fn submit_application(&self, application: &NewApplication) -> ApiResult<()> {
        let request = HttpRequest::post(self.endpoint("student/applications/")).json(application)?;
        self.send(request).await.map(|_| ())
    }

    /// `POST student/applications/{id}/update_status/`
    ///
    /// Returns the updated record when the backend echoes it back, `None`
    /// for a bare acknowledgement.
    pub async fn update_application_status(
        &self,
        id: i64,
        update: &StatusUpdateRequest,
    ) -> ApiResult<Option<Application>> {
        log::info!("✏️ [API] Application {} -> {}", id, update.status);
        let path = format!("student/applications/{}/update_status/", id);
        let request = HttpRequest::post(self.endpoint(&path)).json(update)?;
        let response = self.send(request).await?;
        Ok(echoed_record(&response.body, id))
    }
}

/// The response counts as the updated record only when it is a full
/// application object for the same id.
fn echoed_record(body: &str, id: i64) -> Option<Application> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    let same_id = object.get("id").and_then(Value::as_i64) == Some(id);
    let complete = ["first_name", "status", "created_at"]
        .iter()
        .all(|key| object.contains_key(*key));
    if !(same_id && complete) {
        return None;
    }
    serde_json::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApplicationStatus;
    use crate::services::error::ApiError;
    use crate::services::http::Method;
    use crate::services::mock::{MockTransport, TEST_BASE_URL};
    use crate::utils::{MemoryStorage, REFRESH_TOKEN_KEY};
    use futures::executor::block_on;

    fn client(storage: Rc<MemoryStorage>) -> (ApiClient, Rc<MockTransport>) {
        let transport = MockTransport::new();
        let api = ApiClient::new(TEST_BASE_URL, transport.clone(), storage);
        (api, transport)
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let storage = Rc::new(MemoryStorage::new());
        let api = ApiClient::new("http://host/api", MockTransport::new(), storage.clone());
        assert_eq!(api.endpoint("auth/login/"), "http://host/api/auth/login/");

        let api = ApiClient::new("http://host/api/", MockTransport::new(), storage);
        assert_eq!(api.endpoint("/auth/login/"), "http://host/api/auth/login/");
    }

    #[test]
    fn bearer_header_only_when_token_stored() {
        let storage = Rc::new(MemoryStorage::new());
        let (api, transport) = client(storage.clone());
        transport.respond(Method::Get, "student/applications/", 200, "[]");

        block_on(api.list_applications()).unwrap();
        storage.set(ACCESS_TOKEN_KEY, "tok-123").unwrap();
        storage.set(REFRESH_TOKEN_KEY, "ref-456").unwrap();
        block_on(api.list_applications()).unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].header_value("Authorization"), None);
        assert_eq!(sent[1].header_value("Authorization"), Some("Bearer tok-123"));
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set(ACCESS_TOKEN_KEY, "").unwrap();
        let (api, transport) = client(storage);
        transport.respond(Method::Get, "auth/user/", 200, r#"{"first_name":"Amina"}"#);

        let user = block_on(api.current_user()).unwrap();
        assert_eq!(user.first_name, "Amina");
        assert_eq!(transport.requests()[0].header_value("Authorization"), None);
    }

    #[test]
    fn login_posts_credentials() {
        let (api, transport) = client(Rc::new(MemoryStorage::new()));
        transport.respond(Method::Post, "auth/login/", 200, r#"{"access":"a","refresh":"r"}"#);

        let tokens = block_on(api.login(&LoginRequest {
            username: "amina".into(),
            password: "pw".into(),
        }))
        .unwrap();

        assert_eq!(tokens.access, "a");
        let sent = transport.requests_to(Method::Post, "auth/login/");
        let body: Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "username": "amina", "password": "pw" }));
    }

    #[test]
    fn http_errors_propagate_unchanged() {
        let (api, transport) = client(Rc::new(MemoryStorage::new()));
        transport.respond(Method::Post, "auth/login/", 401, r#"{"detail":"No active account"}"#);

        let err = block_on(api.login(&LoginRequest {
            username: "amina".into(),
            password: "wrong".into(),
        }))
        .unwrap_err();

        assert_eq!(
            err,
            ApiError::Http {
                status: 401,
                body: r#"{"detail":"No active account"}"#.into()
            }
        );
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn network_errors_propagate_unchanged() {
        let (api, transport) = client(Rc::new(MemoryStorage::new()));
        transport.fail(Method::Get, "student/applications/", ApiError::Network("offline".into()));

        let err = block_on(api.list_applications()).unwrap_err();
        assert_eq!(err, ApiError::Network("offline".into()));
    }

    #[test]
    fn status_update_echo_is_used_only_when_complete() {
        let (api, transport) = client(Rc::new(MemoryStorage::new()));
        let path = "student/applications/7/update_status/";
        transport.respond(Method::Post, path, 200, r#"{"message":"Status updated"}"#);
        transport.respond(
            Method::Post,
            path,
            200,
            r#"{"id":7,"first_name":"Amina","last_name":"Yusuf","status":"Rejected","created_at":"2025-01-15"}"#,
        );

        let ack = block_on(api.update_application_status(7, &StatusUpdateRequest::reject())).unwrap();
        assert_eq!(ack, None);

        let echoed = block_on(api.update_application_status(7, &StatusUpdateRequest::reject()))
            .unwrap()
            .unwrap();
        assert_eq!(echoed.status, ApplicationStatus::Rejected);
    }

    #[test]
    fn echo_for_another_id_is_ignored() {
        let body = r#"{"id":8,"first_name":"A","status":"Approved","created_at":"2025-01-15"}"#;
        assert_eq!(echoed_record(body, 7), None);
        assert_eq!(echoed_record("not json", 7), None);
    }
}
