// ============================================================================
// SIGNUP VIEW
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use super::shared::{form_group, route_link};
use crate::dom::{alert, append_child, field_value, on_submit, set_disabled, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::{SignupError, SignupForm, SignupViewModel};

pub fn render_signup(state: &AppState) -> Result<Element, JsValue> {
    let vm = Rc::new(SignupViewModel::new(state));

    let (username_group, username) = form_group("username", "Username", "text", "Choose a username")?;
    let (email_group, email) = form_group("email", "Email", "email", "you@example.com")?;
    let (first_group, first_name) = form_group("first_name", "First Name", "text", "First name")?;
    let (last_group, last_name) = form_group("last_name", "Last Name", "text", "Last name")?;
    let (password_group, password) = form_group("password", "Password", "password", "Create a password")?;
    let (confirm_group, confirm) =
        form_group("password2", "Confirm Password", "password", "Repeat your password")?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-success btn-block")
        .text("Create Account")
        .build();

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .children([
            username_group,
            email_group,
            first_group,
            last_group,
            password_group,
            confirm_group,
            submit_btn.clone(),
        ])?
        .build();

    on_submit(&form, move || {
        if vm.is_submitting() {
            return;
        }
        let signup = SignupForm {
            username: field_value(&username),
            email: field_value(&email),
            first_name: field_value(&first_name),
            last_name: field_value(&last_name),
            password: field_value(&password),
            confirm_password: field_value(&confirm),
        };

        set_disabled(&submit_btn, true);
        let vm = vm.clone();
        let submit_btn = submit_btn.clone();
        spawn_local(async move {
            let result = vm.submit(signup).await;
            set_disabled(&submit_btn, false);
            match result {
                Ok(()) | Err(SignupError::Busy) => {}
                Err(e) => alert(&e.to_string()),
            }
        });
    })?;

    let footer = ElementBuilder::new("p")?
        .class("auth-footer")
        .text("Already have an account? ")
        .build();
    append_child(&footer, &route_link(state, "Sign in", Route::Login, "link")?)?;

    let header = ElementBuilder::new("div")?
        .class("auth-header")
        .child(ElementBuilder::new("h1")?.text("Create Your Account").build())?
        .child(ElementBuilder::new("p")?.text("Join the Alif Mentorship Hub").build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("auth-screen")
        .child(header)?
        .child(
            ElementBuilder::new("div")?
                .class("auth-card")
                .child(form)?
                .child(footer)?
                .build(),
        )?
        .build())
}
