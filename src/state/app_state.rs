// ============================================================================
// APP STATE - Root scope: owns the session, the router and the API client
// ============================================================================
// Cloning is cheap (Rc handles); views receive `&AppState` and clone what
// their closures need.
// ============================================================================

use std::rc::Rc;

use super::route_state::{Route, RouteState};
use super::session_state::SessionState;
use crate::services::{ApiClient, Transport};
use crate::utils::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub session: Rc<SessionState>,
    pub routes: Rc<RouteState>,
    pub api: Rc<ApiClient>,
}

impl AppState {
    /// Session and API client share the same storage, so a stored token is
    /// immediately visible to outgoing requests.
    pub fn new(
        base_url: &str,
        storage: Rc<dyn KeyValueStore>,
        transport: Rc<dyn Transport>,
        initial_route: Route,
    ) -> Self {
        let api = ApiClient::new(base_url, transport, storage.clone());
        Self {
            session: Rc::new(SessionState::new(storage)),
            routes: Rc::new(RouteState::new(initial_route)),
            api: Rc::new(api),
        }
    }

    /// localStorage + fetch, starting at the page's current path
    #[cfg(target_arch = "wasm32")]
    pub fn from_browser() -> Self {
        use crate::utils::BrowserStorage;

        let storage: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
        let initial_route = web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .map(|path| Route::from_path(&path))
            .unwrap_or(Route::Home);

        Self {
            session: Rc::new(SessionState::new(storage.clone())),
            routes: Rc::new(RouteState::new(initial_route)),
            api: Rc::new(ApiClient::from_config(storage)),
        }
    }
}
