// ============================================================================
// APPLICATION FORM VIEW - Embedded in the student dashboard
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use super::shared::form_group;
use crate::dom::{
    alert, append_child, create_element, field_value, on_submit, set_attribute, set_class_name,
    set_disabled, ElementBuilder,
};
use crate::models::NewApplication;
use crate::services::ApiClient;
use crate::viewmodels::application_form_viewmodel::PROGRAM_OPTIONS;
use crate::viewmodels::{ApplicationFormViewModel, FormError};

/// `on_submitted` runs after the backend accepted the application
pub fn render_application_form(
    api: Rc<ApiClient>,
    on_submitted: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let vm = Rc::new(ApplicationFormViewModel::new(api));

    let (first_group, first_name) = form_group("app_first_name", "First Name", "text", "First name")?;
    let (last_group, last_name) = form_group("app_last_name", "Last Name", "text", "Last name")?;
    let (course_group, course) =
        form_group("app_course", "Course of Study", "text", "e.g. Computer Science")?;

    let program = create_element("select")?;
    set_attribute(&program, "id", "app_program")?;
    set_class_name(&program, "form-input");
    for option in PROGRAM_OPTIONS {
        let item = ElementBuilder::new("option")?.attr("value", option)?.text(option).build();
        append_child(&program, &item)?;
    }
    let program_group = ElementBuilder::new("div")?
        .class("form-group")
        .child(
            ElementBuilder::new("label")?
                .attr("for", "app_program")?
                .class("form-label")
                .text("Program")
                .build(),
        )?
        .child(program.clone())?
        .build();

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .text("Submit Application")
        .build();

    let form = ElementBuilder::new("form")?
        .class("application-form")
        .children([first_group, last_group, program_group, course_group, submit_btn.clone()])?
        .build();

    on_submit(&form, move || {
        if vm.is_submitting() {
            return;
        }
        let application = NewApplication {
            first_name: field_value(&first_name),
            last_name: field_value(&last_name),
            program: field_value(&program),
            course: field_value(&course),
        };

        set_disabled(&submit_btn, true);
        let vm = vm.clone();
        let submit_btn = submit_btn.clone();
        let on_submitted = on_submitted.clone();
        spawn_local(async move {
            let result = vm.submit(application).await;
            set_disabled(&submit_btn, false);
            match result {
                Ok(()) => on_submitted(),
                Err(FormError::Busy) => {}
                Err(e) => alert(&e.to_string()),
            }
        });
    })?;

    Ok(form)
}
