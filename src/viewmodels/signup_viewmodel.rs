// ============================================================================
// SIGNUP VIEWMODEL - Account registration
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use serde_json::Value;
use thiserror::Error;

use crate::models::RegisterRequest;
use crate::services::{ApiClient, ApiError};
use crate::state::{AppState, Route, RouteState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    fn has_blank_field(&self) -> bool {
        [
            &self.username,
            &self.email,
            &self.first_name,
            &self.last_name,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|value| value.trim().is_empty())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SignupError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("A registration is already in progress")]
    Busy,
    /// Backend validation message(s)
    #[error("{0}")]
    Rejected(String),
    #[error("Registration failed. Please try again.")]
    Failed,
}

pub struct SignupViewModel {
    api: Rc<ApiClient>,
    routes: Rc<RouteState>,
    submitting: Cell<bool>,
}

impl SignupViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            routes: state.routes.clone(),
            submitting: Cell::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Register, then send the user to the login page
    pub async fn submit(&self, form: SignupForm) -> Result<(), SignupError> {
        if self.submitting.get() {
            return Err(SignupError::Busy);
        }
        if form.has_blank_field() {
            return Err(SignupError::MissingFields);
        }
        if form.password != form.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }

        let request = RegisterRequest {
            username: form.username.trim().to_string(),
            email: form.email.trim().to_string(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            password: form.password,
            password2: form.confirm_password,
        };

        self.submitting.set(true);
        let result = self.api.register(&request).await;
        self.submitting.set(false);

        match result {
            Ok(()) => {
                log::info!("✅ [SIGNUP] Account created for {}", request.username);
                self.routes.navigate(Route::Login);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [SIGNUP] {}", e);
                Err(rejection_message(&e).map_or(SignupError::Failed, SignupError::Rejected))
            }
        }
    }
}

/// Human-readable reason from a 4xx body: DRF field errors
/// (`{"field": ["msg", ...]}`), `{"detail": "..."}` or plain text.
fn rejection_message(error: &ApiError) -> Option<String> {
    let body = match error {
        ApiError::Http { status, body } if (400..500).contains(status) => body.trim(),
        _ => return None,
    };
    if body.is_empty() {
        return None;
    }

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if body.starts_with('<') => return None,
        Err(_) => return Some(body.to_string()),
    };

    let object = value.as_object()?;
    let mut messages = Vec::new();
    for (field, detail) in object {
        let text = match detail {
            Value::String(text) => text.clone(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            _ => continue,
        };
        if text.is_empty() {
            continue;
        }
        if field == "detail" || field == "non_field_errors" {
            messages.push(text);
        } else {
            messages.push(format!("{}: {}", field, text));
        }
    }

    if messages.is_empty() {
        None
    } else {
        Some(messages.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::{MockTransport, TEST_BASE_URL};
    use crate::services::Method;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;

    fn setup() -> (AppState, Rc<MockTransport>) {
        let transport = MockTransport::new();
        let state = AppState::new(
            TEST_BASE_URL,
            Rc::new(MemoryStorage::new()),
            transport.clone(),
            Route::Signup,
        );
        (state, transport)
    }

    fn form() -> SignupForm {
        SignupForm {
            username: "amina".into(),
            email: "amina@example.com".into(),
            first_name: "Amina".into(),
            last_name: "Yusuf".into(),
            password: "securepass123".into(),
            confirm_password: "securepass123".into(),
        }
    }

    #[test]
    fn mismatched_passwords_send_no_request() {
        let (state, transport) = setup();
        let vm = SignupViewModel::new(&state);

        let mut mismatched = form();
        mismatched.confirm_password = "differentpass".into();

        assert_eq!(block_on(vm.submit(mismatched)), Err(SignupError::PasswordMismatch));
        assert!(transport.requests().is_empty());
        assert_eq!(state.routes.current(), Route::Signup);
    }

    #[test]
    fn blank_field_sends_no_request() {
        let (state, transport) = setup();
        let vm = SignupViewModel::new(&state);

        let mut incomplete = form();
        incomplete.email.clear();

        assert_eq!(block_on(vm.submit(incomplete)), Err(SignupError::MissingFields));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn success_posts_both_passwords_and_goes_to_login() {
        let (state, transport) = setup();
        transport.respond(Method::Post, "auth/register/", 201, r#"{"username":"amina"}"#);

        let vm = SignupViewModel::new(&state);
        block_on(vm.submit(form())).unwrap();

        let sent = transport.requests_to(Method::Post, "auth/register/");
        let body: Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["password"], "securepass123");
        assert_eq!(body["password2"], "securepass123");
        assert_eq!(body["first_name"], "Amina");
        assert_eq!(state.routes.current(), Route::Login);
        assert!(!vm.is_submitting());
    }

    #[test]
    fn field_errors_are_shown_to_the_user() {
        let (state, transport) = setup();
        transport.respond(
            Method::Post,
            "auth/register/",
            400,
            r#"{"username":["A user with that username already exists."]}"#,
        );

        let vm = SignupViewModel::new(&state);
        let err = block_on(vm.submit(form())).unwrap_err();

        assert_eq!(
            err,
            SignupError::Rejected("username: A user with that username already exists.".into())
        );
        assert_eq!(state.routes.current(), Route::Signup);
    }

    #[test]
    fn opaque_failures_get_the_generic_message() {
        let server_error = ApiError::Http {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(rejection_message(&server_error), None);
        assert_eq!(rejection_message(&ApiError::Network("offline".into())), None);

        let html = ApiError::Http {
            status: 400,
            body: "<html>Bad Request</html>".into(),
        };
        assert_eq!(rejection_message(&html), None);

        let text = ApiError::Http {
            status: 400,
            body: "Email already registered".into(),
        };
        assert_eq!(rejection_message(&text).as_deref(), Some("Email already registered"));
    }
}
