// ============================================================================
// NAVBAR VIEWMODEL - Which links to show, sign-out
// ============================================================================
// The view recomputes the model on every session signal and route change,
// so authentication is always re-read from storage at render time.
// ============================================================================

use std::rc::Rc;

use crate::state::{AppState, Route, RouteState, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Anonymous,
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    Plain,
    /// Outlined call to action (Login)
    Primary,
    /// Filled call to action (Signup)
    Success,
}

impl LinkStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            LinkStyle::Plain => "nav-link",
            LinkStyle::Primary => "nav-link nav-link-primary",
            LinkStyle::Success => "nav-link nav-link-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    pub style: LinkStyle,
}

impl NavLink {
    fn plain(label: &'static str, route: Route) -> Self {
        Self {
            label,
            route,
            style: LinkStyle::Plain,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavBarModel {
    pub mode: NavMode,
    pub links: Vec<NavLink>,
    pub show_sign_out: bool,
}

impl NavBarModel {
    /// Links and Sign-Out visibility for a session state and route
    pub fn evaluate(authenticated: bool, route: &Route) -> Self {
        let mut links = vec![
            NavLink::plain("Home", Route::Home),
            NavLink::plain("About", Route::About),
            NavLink::plain("Contact", Route::Contact),
        ];

        if !authenticated {
            links.push(NavLink {
                label: "Login",
                route: Route::Login,
                style: LinkStyle::Primary,
            });
            links.push(NavLink {
                label: "Signup",
                route: Route::Signup,
                style: LinkStyle::Success,
            });
            return Self {
                mode: NavMode::Anonymous,
                links,
                show_sign_out: false,
            };
        }

        Self {
            mode: NavMode::Authenticated,
            links,
            show_sign_out: route.is_dashboard(),
        }
    }
}

pub struct NavBarViewModel {
    session: Rc<SessionState>,
    routes: Rc<RouteState>,
}

impl NavBarViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            routes: state.routes.clone(),
        }
    }

    /// Current model, read from storage and the router
    pub fn model(&self) -> NavBarModel {
        NavBarModel::evaluate(self.session.is_authenticated(), &self.routes.current())
    }

    /// Deliver a fresh model after every session signal and route change.
    /// Register once per mounted navbar.
    pub fn watch<F>(&self, on_change: F)
    where
        F: Fn(NavBarModel) + 'static,
    {
        let on_change: Rc<dyn Fn(NavBarModel)> = Rc::new(on_change);

        {
            let session = Rc::downgrade(&self.session);
            let routes = Rc::downgrade(&self.routes);
            let on_change = on_change.clone();
            self.session.subscribe(move |signal| {
                log::debug!("🔄 [NAVBAR] {}", signal.name());
                if let (Some(session), Some(routes)) = (session.upgrade(), routes.upgrade()) {
                    on_change(NavBarModel::evaluate(session.is_authenticated(), &routes.current()));
                }
            });
        }

        let session = Rc::downgrade(&self.session);
        self.routes.subscribe(move |route| {
            if let Some(session) = session.upgrade() {
                on_change(NavBarModel::evaluate(session.is_authenticated(), route));
            }
        });
    }

    /// Clear the session, then go home
    pub fn sign_out(&self) {
        log::info!("👋 [NAVBAR] Sign out");
        self.session.logout();
        self.routes.navigate(Route::Home);
    }
}
