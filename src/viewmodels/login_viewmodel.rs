// ============================================================================
// LOGIN VIEWMODEL - Credentials -> tokens -> dashboard
// ============================================================================
// Business logic only: the view reads `is_loading()` / `submit_label()` and
// shows the error message in an alert.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::models::{LoginRequest, Role};
use crate::services::ApiClient;
use crate::state::{AppState, Route, RouteState, SessionState};
use crate::utils::{StorageError, INVALID_CREDENTIALS_MESSAGE};

pub const SIGN_IN_LABEL: &str = "Sign In";
pub const SIGNING_IN_LABEL: &str = "Signing in...";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Role toggle, used when the backend does not say
    pub role: Role,
}

#[derive(Debug, Error, PartialEq)]
pub enum LoginError {
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,
    #[error("Please enter your username and password")]
    MissingFields,
    #[error("A sign-in is already in progress")]
    Busy,
    #[error("Could not save your session: {0}")]
    Storage(#[from] StorageError),
}

pub struct LoginViewModel {
    api: Rc<ApiClient>,
    session: Rc<SessionState>,
    routes: Rc<RouteState>,
    loading: Cell<bool>,
}

impl LoginViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            session: state.session.clone(),
            routes: state.routes.clone(),
            loading: Cell::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Button text for the current loading state
    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SIGNING_IN_LABEL
        } else {
            SIGN_IN_LABEL
        }
    }

    /// Log in, store the tokens and navigate to the role's dashboard.
    /// Returns the route that was navigated to.
    pub async fn submit(&self, form: LoginForm) -> Result<Route, LoginError> {
        if self.loading.get() {
            return Err(LoginError::Busy);
        }
        let username = form.username.trim();
        if username.is_empty() || form.password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: form.password.clone(),
        };

        self.loading.set(true);
        let result = self.api.login(&request).await;
        self.loading.set(false);

        let tokens = result.map_err(|e| {
            if e.is_auth_rejection() {
                log::error!("❌ [LOGIN] Rejected by server: {}", e);
            } else {
                log::error!("❌ [LOGIN] {}", e);
            }
            LoginError::InvalidCredentials
        })?;

        self.session.login(&tokens)?;

        let role = match tokens.role {
            Some(claimed) => {
                if claimed != form.role {
                    log::warn!(
                        "⚠️ [LOGIN] Account role {} overrides selected {}",
                        claimed.label(),
                        form.role.label()
                    );
                }
                claimed
            }
            None => form.role,
        };

        let target = Route::dashboard_for(role);
        log::info!("✅ [LOGIN] Signed in as {} ({})", request.username, role.label());
        self.routes.navigate(target.clone());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::{MockTransport, TEST_BASE_URL};
    use crate::services::{ApiError, Method};
    use crate::state::SessionSignal;
    use crate::utils::{KeyValueStore, MemoryStorage, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;

    fn setup() -> (AppState, Rc<MockTransport>, Rc<MemoryStorage>) {
        let storage = Rc::new(MemoryStorage::new());
        let transport = MockTransport::new();
        let state = AppState::new(TEST_BASE_URL, storage.clone(), transport.clone(), Route::Login);
        (state, transport, storage)
    }

    fn form(role: Role) -> LoginForm {
        LoginForm {
            username: "amina".into(),
            password: "secret".into(),
            role,
        }
    }

    #[test]
    fn success_stores_tokens_signals_and_redirects_by_toggle() {
        let (state, transport, storage) = setup();
        transport.respond(Method::Post, "auth/login/", 200, r#"{"access":"a1","refresh":"r1"}"#);

        let signals = Rc::new(RefCell::new(Vec::new()));
        let sink = signals.clone();
        state.session.subscribe(move |signal| sink.borrow_mut().push(signal));

        let vm = LoginViewModel::new(&state);
        let target = block_on(vm.submit(form(Role::Mentor))).unwrap();

        assert_eq!(target, Route::MentorDashboard);
        assert_eq!(state.routes.current(), Route::MentorDashboard);
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("a1"));
        assert_eq!(storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("r1"));
        assert_eq!(*signals.borrow(), vec![SessionSignal::LoginSucceeded]);
        assert!(!vm.is_loading());
    }

    #[test]
    fn role_claim_beats_the_toggle() {
        let (state, transport, _) = setup();
        transport.respond(
            Method::Post,
            "auth/login/",
            200,
            r#"{"access":"a","refresh":"r","role":"student"}"#,
        );

        let vm = LoginViewModel::new(&state);
        let target = block_on(vm.submit(form(Role::Mentor))).unwrap();

        assert_eq!(target, Route::StudentDashboard);
    }

    #[test]
    fn rejection_maps_to_generic_message() {
        let (state, transport, storage) = setup();
        transport.respond(Method::Post, "auth/login/", 401, r#"{"detail":"No active account"}"#);

        let vm = LoginViewModel::new(&state);
        let err = block_on(vm.submit(form(Role::Student))).unwrap_err();

        assert_eq!(err, LoginError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(state.routes.current(), Route::Login);
        assert!(!vm.is_loading());
    }

    #[test]
    fn network_failure_is_also_invalid_credentials() {
        let (state, transport, _) = setup();
        transport.fail(Method::Post, "auth/login/", ApiError::Network("offline".into()));

        let vm = LoginViewModel::new(&state);
        assert_eq!(
            block_on(vm.submit(form(Role::Student))),
            Err(LoginError::InvalidCredentials)
        );
    }

    #[test]
    fn blank_fields_send_nothing() {
        let (state, transport, _) = setup();
        let vm = LoginViewModel::new(&state);

        let mut blank = form(Role::Student);
        blank.username = "   ".into();
        assert_eq!(block_on(vm.submit(blank)), Err(LoginError::MissingFields));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn second_submit_while_loading_is_rejected() {
        let (state, transport, _) = setup();
        transport.respond(Method::Post, "auth/login/", 200, r#"{"access":"a","refresh":"r"}"#);

        let vm = Rc::new(LoginViewModel::new(&state));
        let observed = Rc::new(RefCell::new(Vec::new()));
        {
            let vm = Rc::downgrade(&vm);
            let observed = observed.clone();
            transport.on_send(move |_| {
                if let Some(vm) = vm.upgrade() {
                    observed.borrow_mut().push(vm.submit_label());
                    let second = vm.submit(form(Role::Student)).now_or_never();
                    observed.borrow_mut().push(match second {
                        Some(Err(LoginError::Busy)) => "busy",
                        _ => "unexpected",
                    });
                }
            });
        }

        block_on(vm.submit(form(Role::Student))).unwrap();

        assert_eq!(*observed.borrow(), vec!["Signing in...", "busy"]);
        assert_eq!(transport.requests_to(Method::Post, "auth/login/").len(), 1);
        assert_eq!(vm.submit_label(), "Sign In");
    }
}
