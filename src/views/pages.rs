// ============================================================================
// STATIC PAGES - Home, About, Contact, not found
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::shared::{card, route_link};
use crate::dom::{append_child, text_element, ElementBuilder};
use crate::state::{AppState, Route};

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let actions = ElementBuilder::new("div")?
        .class("hero-actions")
        .child(route_link(state, "Get Started", Route::Signup, "btn btn-success")?)?
        .child(route_link(state, "Sign In", Route::Login, "btn btn-primary")?)?
        .build();

    let hero = ElementBuilder::new("section")?
        .class("hero")
        .child(text_element("h1", "hero-title", "Alif Mentorship Hub")?)?
        .child(text_element(
            "p",
            "hero-subtitle",
            "Career guidance, mentorship connections, technology training and community \
             engagement for students.",
        )?)?
        .child(actions)?
        .build();

    let features = ElementBuilder::new("div")?.class("feature-grid").build();
    let highlights = [
        ("🎯", "Career Guidance", "Plan your next step with people who have taken it."),
        ("👨‍🎓", "Mentorship", "Get matched with a mentor in your field."),
        ("💻", "Tech Training", "Hands-on coding and digital literacy workshops."),
        ("🌐", "Community", "Events, meetups and webinars with peers."),
    ];
    for (icon, title, detail) in highlights {
        let tile = ElementBuilder::new("div")?
            .class("feature")
            .child(text_element("div", "feature-icon", icon)?)?
            .child(text_element("h3", "feature-title", title)?)?
            .child(text_element("p", "muted", detail)?)?
            .build();
        append_child(&features, &tile)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("page home-page")
        .child(hero)?
        .child(features)?
        .build())
}

pub fn render_about() -> Result<Element, JsValue> {
    let about = card("About Us", "about-card")?;
    append_child(
        &about,
        &text_element(
            "p",
            "",
            "The Alif Mentorship Hub connects students with mentors who review their \
             applications, schedule consultations and guide them through their studies.",
        )?,
    )?;
    Ok(ElementBuilder::new("div")?.class("page").child(about)?.build())
}

pub fn render_contact() -> Result<Element, JsValue> {
    let contact = card("Contact", "contact-card")?;
    append_child(&contact, &text_element("p", "", "Questions about the program? Reach us at:")?)?;
    append_child(&contact, &text_element("p", "contact-line", "📧 info@alifmentorship.org")?)?;
    Ok(ElementBuilder::new("div")?.class("page").child(contact)?.build())
}

pub fn render_not_found(state: &AppState, path: &str) -> Result<Element, JsValue> {
    let panel = card("Page not found", "not-found-card")?;
    append_child(&panel, &text_element("p", "muted", &format!("Nothing lives at {}", path))?)?;
    append_child(&panel, &route_link(state, "Back to home", Route::Home, "link")?)?;
    Ok(ElementBuilder::new("div")?.class("page").child(panel)?.build())
}
