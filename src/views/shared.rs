// ============================================================================
// SHARED VIEW PIECES - Form fields, links, loading screen
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{create_element, on_navigate, set_attribute, set_class_name, ElementBuilder};
use crate::state::{AppState, Route};

/// Labelled input. Returns the group and the input so the caller can read it.
pub fn form_group(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
) -> Result<(Element, Element), JsValue> {
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .class("form-label")
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
    set_attribute(&input, "placeholder", placeholder)?;
    set_attribute(&input, "required", "")?;
    set_class_name(&input, "form-input");

    let group = ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(input.clone())?
        .build();

    Ok((group, input))
}

/// `<a href>` that routes in-app instead of reloading
pub fn route_link(state: &AppState, label: &str, route: Route, class: &str) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .attr("href", route.path())?
        .class(class)
        .text(label)
        .build();

    let routes = state.routes.clone();
    on_navigate(&link, move || routes.navigate(route.clone()))?;
    Ok(link)
}

pub fn loading_screen(message: &str) -> Result<Element, JsValue> {
    let spinner = ElementBuilder::new("div")?.class("spinner").build();
    let text = ElementBuilder::new("p")?.class("loading-text").text(message).build();
    Ok(ElementBuilder::new("div")?
        .class("loading-screen")
        .child(spinner)?
        .child(text)?
        .build())
}

/// Card with a heading; children are appended by the caller
pub fn card(title: &str, class: &str) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h2")?.class("card-title").text(title).build();
    Ok(ElementBuilder::new("section")?
        .class(&format!("card {}", class))
        .child(heading)?
        .build())
}
