// ============================================================================
// NAVBAR VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::shared::route_link;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::{NavBarModel, NavBarViewModel, NavMode};

pub fn render_navbar(state: &AppState, model: &NavBarModel) -> Result<Element, JsValue> {
    let vm = NavBarViewModel::new(state);

    let brand = route_link(state, "Alif Mentorship Hub", Route::Home, "navbar-brand")?;
    let links = ElementBuilder::new("div")?.class("navbar-links").build();

    for link in &model.links {
        let anchor = route_link(state, link.label, link.route.clone(), link.style.css_class())?;
        append_child(&links, &anchor)?;
    }

    if model.show_sign_out {
        let button = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn btn-danger")
            .text("Sign Out")
            .build();
        on_click(&button, move |_| vm.sign_out())?;
        append_child(&links, &button)?;
    }

    let mode = match model.mode {
        NavMode::Anonymous => "anonymous",
        NavMode::Authenticated => "authenticated",
    };

    Ok(ElementBuilder::new("nav")?
        .class("navbar")
        .attr("data-mode", mode)?
        .child(brand)?
        .child(links)?
        .build())
}
