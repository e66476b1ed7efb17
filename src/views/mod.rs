// ============================================================================
// VIEWS - DOM rendering only; logic lives in the viewmodels
// ============================================================================

pub mod application_form;
pub mod login;
pub mod mentor_dashboard;
pub mod navbar;
pub mod pages;
pub mod shared;
pub mod signup;
pub mod student_dashboard;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::{AppState, Route};

pub use navbar::render_navbar;

/// Page for the current route
pub fn render_page(state: &AppState) -> Result<Element, JsValue> {
    match state.routes.current() {
        Route::Home => pages::render_home(state),
        Route::About => pages::render_about(),
        Route::Contact => pages::render_contact(),
        Route::Login => login::render_login(state),
        Route::Signup => signup::render_signup(state),
        Route::StudentDashboard => student_dashboard::render_student_dashboard(state),
        Route::MentorDashboard => mentor_dashboard::render_mentor_dashboard(state),
        Route::NotFound(path) => pages::render_not_found(state, &path),
    }
}
