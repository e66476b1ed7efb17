// ============================================================================
// MENTOR DASHBOARD VIEW - Application list with approve / reject
// ============================================================================

use std::rc::Rc;

use chrono::Utc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    alert, append_child, on_click, replace_children, set_disabled, text_element, ElementBuilder,
};
use crate::state::AppState;
use crate::viewmodels::mentor_dashboard_viewmodel::{ApplicationRow, EMPTY_QUEUE_MESSAGE};
use crate::viewmodels::{DashboardError, MentorDashboardViewModel, UpdateOutcome};

struct MentorPage {
    vm: MentorDashboardViewModel,
    list: Element,
}

#[derive(Clone, Copy)]
enum Command {
    Approve,
    Reject,
}

pub fn render_mentor_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?
        .class("application-list")
        .child(text_element("p", "loading-text", "Loading applications...")?)?
        .build();

    let page = Rc::new(MentorPage {
        vm: MentorDashboardViewModel::new(state.api.clone()),
        list: list.clone(),
    });

    {
        let page = page.clone();
        spawn_local(async move {
            if let Err(e) = page.vm.load().await {
                alert(&e.to_string());
            }
            render_list(&page);
        });
    }

    Ok(ElementBuilder::new("div")?
        .class("dashboard mentor-dashboard")
        .child(text_element("h1", "dashboard-title", "Mentor Dashboard")?)?
        .child(list)?
        .build())
}

fn render_list(page: &Rc<MentorPage>) {
    if let Err(e) = try_render_list(page) {
        log::error!("❌ [MENTOR] Render failed: {:?}", e);
    }
}

fn try_render_list(page: &Rc<MentorPage>) -> Result<(), JsValue> {
    let rows = page.vm.rows();
    if rows.is_empty() {
        let empty = text_element("p", "empty-state", EMPTY_QUEUE_MESSAGE)?;
        return replace_children(&page.list, &empty);
    }

    let items = ElementBuilder::new("ul")?.class("applications").build();
    for row in &rows {
        append_child(&items, &render_row(page, row)?)?;
    }
    replace_children(&page.list, &items)
}

fn render_row(page: &Rc<MentorPage>, row: &ApplicationRow) -> Result<Element, JsValue> {
    let item = ElementBuilder::new("li")?
        .class("application-item")
        .attr("data-id", &row.id.to_string())?
        .build();

    let fields = [
        ("Name:", row.student.as_str()),
        ("Course:", row.course.as_str()),
        ("Status:", row.status.as_str()),
        ("Feedback:", row.feedback.as_str()),
        ("Consultation Date:", row.consultation.as_str()),
    ];
    for (label, value) in fields {
        let line = ElementBuilder::new("p")?
            .child(text_element("strong", "", label)?)?
            .child(text_element("span", "", &format!(" {}", value))?)?
            .build();
        append_child(&item, &line)?;
    }

    let approve = text_element("button", "btn btn-success", "Approve & Schedule")?;
    let reject = text_element("button", "btn btn-danger", "Reject")?;
    set_disabled(&approve, row.updating);
    set_disabled(&reject, row.updating);

    for (button, command) in [(&approve, Command::Approve), (&reject, Command::Reject)] {
        let page = page.clone();
        let id = row.id;
        let buttons = [approve.clone(), reject.clone()];
        on_click(button, move |_| {
            let pressed_at = Utc::now();
            for button in &buttons {
                set_disabled(button, true);
            }
            let page = page.clone();
            spawn_local(async move {
                let result = match command {
                    Command::Approve => page.vm.approve(id, pressed_at).await,
                    Command::Reject => page.vm.reject(id).await,
                };
                report(result);
                render_list(&page);
            });
        })?;
    }

    let actions = ElementBuilder::new("div")?
        .class("actions")
        .child(approve)?
        .child(reject)?
        .build();
    append_child(&item, &actions)?;
    Ok(item)
}

fn report(result: Result<UpdateOutcome, DashboardError>) {
    match result {
        Ok(outcome) => {
            alert(&outcome.message);
            if let Some(refresh_error) = outcome.refresh_error {
                alert(&refresh_error.to_string());
            }
        }
        Err(DashboardError::Busy(id)) => log::debug!("⏳ [MENTOR] {} still updating", id),
        Err(e) => alert(&e.to_string()),
    }
}
