// ============================================================================
// LOGIN VIEW
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use super::shared::{form_group, route_link};
use crate::dom::{
    alert, append_child, field_value, on_click, on_submit, set_class_name, set_disabled,
    set_text_content, ElementBuilder,
};
use crate::models::Role;
use crate::state::{AppState, Route};
use crate::viewmodels::login_viewmodel::{SIGNING_IN_LABEL, SIGN_IN_LABEL};
use crate::viewmodels::{LoginError, LoginForm, LoginViewModel};

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let vm = Rc::new(LoginViewModel::new(state));
    let role = Rc::new(Cell::new(Role::default()));

    let header = ElementBuilder::new("div")?
        .class("auth-header")
        .child(ElementBuilder::new("h1")?.text("Welcome Back").build())?
        .child(ElementBuilder::new("p")?.text("Sign in to your account").build())?
        .build();

    // Role toggle
    let student_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("role-option active")
        .text("👨‍🎓 Student")
        .build();
    let mentor_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("role-option")
        .text("👩‍🏫 Mentor")
        .build();

    for (button, choice) in [(&student_btn, Role::Student), (&mentor_btn, Role::Mentor)] {
        let role = role.clone();
        let student_btn = student_btn.clone();
        let mentor_btn = mentor_btn.clone();
        on_click(button, move |_| {
            role.set(choice);
            let (active, inactive) = match choice {
                Role::Student => (&student_btn, &mentor_btn),
                Role::Mentor => (&mentor_btn, &student_btn),
            };
            set_class_name(active, "role-option active");
            set_class_name(inactive, "role-option");
        })?;
    }

    let toggle = ElementBuilder::new("div")?
        .class("role-toggle")
        .child(student_btn)?
        .child(mentor_btn)?
        .build();

    // Form
    let (username_group, username_input) =
        form_group("username", "Username or Email", "text", "Enter your username")?;
    let (password_group, password_input) =
        form_group("password", "Password", "password", "Enter your password")?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .text(SIGN_IN_LABEL)
        .build();

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .child(username_group)?
        .child(password_group)?
        .child(submit_btn.clone())?
        .build();

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            if vm.is_loading() {
                return;
            }
            let credentials = LoginForm {
                username: field_value(&username_input),
                password: field_value(&password_input),
                role: role.get(),
            };

            set_disabled(&submit_btn, true);
            set_text_content(&submit_btn, SIGNING_IN_LABEL);

            let vm = vm.clone();
            let submit_btn = submit_btn.clone();
            spawn_local(async move {
                let result = vm.submit(credentials).await;

                set_disabled(&submit_btn, false);
                set_text_content(&submit_btn, vm.submit_label());

                match result {
                    Ok(_) | Err(LoginError::Busy) => {}
                    Err(e) => alert(&e.to_string()),
                }
            });
        })?;
    }

    let footer = ElementBuilder::new("p")?
        .class("auth-footer")
        .text("Don't have an account? ")
        .build();
    append_child(&footer, &route_link(state, "Sign up", Route::Signup, "link")?)?;

    let card = ElementBuilder::new("div")?
        .class("auth-card")
        .child(toggle)?
        .child(form)?
        .child(footer)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("auth-screen")
        .child(header)?
        .child(card)?
        .build())
}
