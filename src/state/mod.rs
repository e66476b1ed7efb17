// ============================================================================
// STATE MODULE - Rc<RefCell> state + notifications
// ============================================================================

pub mod app_state;
pub mod applications_state;
pub mod reactivity;
pub mod route_state;
pub mod session_state;

pub use app_state::AppState;
pub use applications_state::ApplicationCache;
pub use reactivity::{Notifier, ReactiveState, SubscriptionId};
pub use route_state::{is_dashboard_path, Route, RouteState};
pub use session_state::{is_session_key, SessionSignal, SessionState};
