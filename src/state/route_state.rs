// ============================================================================
// ROUTE STATE - Current route (synced with history.pushState on wasm)
// ============================================================================

use super::reactivity::{ReactiveState, SubscriptionId};
use crate::models::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    Login,
    Signup,
    StudentDashboard,
    MentorDashboard,
    NotFound(String),
}

impl Route {
    /// Unknown paths become `NotFound`
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        match normalized {
            "/" => Route::Home,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/student/dashboard" => Route::StudentDashboard,
            "/mentor/dashboard" => Route::MentorDashboard,
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Path to push into the address bar
    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::StudentDashboard => "/student/dashboard",
            Route::MentorDashboard => "/mentor/dashboard",
            Route::NotFound(path) => path,
        }
    }

    /// Dashboard landing page for a role
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Student => Route::StudentDashboard,
            Role::Mentor => Route::MentorDashboard,
        }
    }

    /// Path-based rule: anything under /student/, /mentor/ or containing /dashboard
    pub fn is_dashboard(&self) -> bool {
        is_dashboard_path(self.path())
    }
}

/// Whether the Sign-Out button belongs on `path`
pub fn is_dashboard_path(path: &str) -> bool {
    path.contains("/dashboard") || path.contains("/student/") || path.contains("/mentor/")
}

pub struct RouteState {
    current: ReactiveState<Route>,
}

impl RouteState {
    pub fn new(initial: Route) -> Self {
        Self {
            current: ReactiveState::new(initial),
        }
    }

    /// Route being shown
    pub fn current(&self) -> Route {
        self.current.get()
    }

    /// Change route and notify (no-op when already there)
    pub fn navigate(&self, route: Route) {
        if self.current.get() == route {
            return;
        }
        log::info!("🧭 [ROUTER] -> {}", route.path());
        self.current.set(route);
    }

    /// Called with the new route after each navigation
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Route) + 'static,
    {
        self.current.subscribe(callback)
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
